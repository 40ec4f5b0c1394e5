//! # Block Module
//!
//! This module provides the appearance of a single voxel: one texture per
//! face. A block has no identity of its own, it is only the grouping of the
//! six face textures.

use std::sync::Arc;

use block_side::BlockSide;

use crate::engine_state::rendering::texture::Texture;

pub mod block_side;

/// Represents the appearance of a single opaque unit voxel.
///
/// Each face holds a shared reference to its texture. Cloning a block only
/// bumps reference counts, the pixel data is never copied.
#[derive(Clone, Debug)]
pub struct Block {
    /// Texture of the face at the cell's upper y.
    pub top: Arc<Texture>,
    /// Texture of the face at the cell's lower y.
    pub bottom: Arc<Texture>,
    /// Texture of the face at the cell's lower x.
    pub left: Arc<Texture>,
    /// Texture of the face at the cell's upper x.
    pub right: Arc<Texture>,
    /// Texture of the face at the cell's lower z.
    pub front: Arc<Texture>,
    /// Texture of the face at the cell's upper z.
    pub back: Arc<Texture>,
}

impl Block {
    /// Creates a block with the same texture on all six faces.
    pub fn uniform(texture: Arc<Texture>) -> Self {
        Block {
            top: texture.clone(),
            bottom: texture.clone(),
            left: texture.clone(),
            right: texture.clone(),
            front: texture.clone(),
            back: texture,
        }
    }

    /// Creates a block with distinct top and bottom and one texture for the
    /// four vertical sides, the usual layout for grass-like blocks.
    pub fn with_sides(top: Arc<Texture>, bottom: Arc<Texture>, side: Arc<Texture>) -> Self {
        Block {
            top,
            bottom,
            left: side.clone(),
            right: side.clone(),
            front: side.clone(),
            back: side,
        }
    }

    /// Returns the texture of the given face.
    pub fn texture(&self, side: BlockSide) -> &Arc<Texture> {
        match side {
            BlockSide::LEFT => &self.left,
            BlockSide::RIGHT => &self.right,
            BlockSide::BOTTOM => &self.bottom,
            BlockSide::TOP => &self.top,
            BlockSide::FRONT => &self.front,
            BlockSide::BACK => &self.back,
        }
    }
}
