//! Errors surfaced at the renderer's boundaries.
//!
//! Numeric degeneracies inside the tracer never show up here: a face that
//! cannot be hit is simply skipped. Everything in this enum aborts the render
//! before any output is written.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::engine_state::voxels::{block::block_side::BlockSide, world::Coords};

/// Everything that can go wrong while setting up or finishing a render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A texture image is missing or cannot be decoded.
    #[error("failed to load texture {}: {source}", path.display())]
    TextureLoad {
        /// The image that failed.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },

    /// A texture image decoded to zero pixels.
    #[error("texture {} has no pixels", path.display())]
    EmptyTexture {
        /// The offending image.
        path: PathBuf,
    },

    /// An in-memory image with a zero width or height was used as a texture.
    #[error("texture image is {width}x{height}, it needs at least one pixel")]
    EmptyImage {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },

    /// The rendered image could not be written.
    #[error("failed to write image {}: {source}", path.display())]
    ImageWrite {
        /// Requested output path.
        path: PathBuf,
        /// Encoder or I/O error.
        #[source]
        source: image::ImageError,
    },

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::RenderConfig`].
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The world description file could not be read.
    #[error("failed to read world {}: {source}", path.display())]
    WorldRead {
        /// World file path.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: io::Error,
    },

    /// The world description file is malformed.
    #[error("failed to parse world {}: {source}", path.display())]
    WorldParse {
        /// World file path.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A cell names a block that is not defined.
    #[error("cell {at} uses undefined block `{name}`")]
    UnknownBlock {
        /// The cell.
        at: Coords,
        /// The missing block name.
        name: String,
    },

    /// A block names a texture that is not defined.
    #[error("block `{block}` uses undefined texture `{name}`")]
    UnknownTexture {
        /// The block being built.
        block: String,
        /// The missing texture name.
        name: String,
    },

    /// A block leaves one of its faces without a texture.
    #[error("block `{block}` has no texture for its {side} face")]
    MissingFace {
        /// The block being built.
        block: String,
        /// The uncovered face.
        side: BlockSide,
    },

    /// A worker thread went away before returning its rows.
    #[error("render worker disconnected before finishing its rows")]
    WorkerDisconnected,
}
