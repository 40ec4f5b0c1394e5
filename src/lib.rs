#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! # Voxel Ray Tracer
//!
//! A batch renderer that produces a single still image of a sparse voxel
//! world. One ray is cast per output pixel from a fixed camera through a view
//! plane; the nearest textured voxel face it hits decides the pixel's color.
//!
//! ## Key Modules
//!
//! * `core` - Geometry primitives
//! * `engine_state` - World, face list, tracer, camera and worker pool
//! * `config` - Render options, loadable from JSON
//! * `error` - Errors surfaced at the boundaries (assets, config, output)
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_raytracer::{load_world, save_frame, RenderConfig, Renderer, TextureLibrary};
//!
//! # fn main() -> Result<(), voxel_raytracer::RenderError> {
//! let config = RenderConfig::default();
//! let world = load_world(&config.world, &mut TextureLibrary::new())?;
//! let frame = Renderer::new(&config).render(&world)?;
//! save_frame(&frame, &config.output)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Non-features
//!
//! No lighting, shadows, reflections or anti-aliasing, and no acceleration
//! structure: every ray is tested against every face.

use std::path::PathBuf;

use log::info;

pub mod config;
pub mod core;
pub mod engine_state;
pub mod error;

pub use config::{RenderConfig, ScreenConfig, WorldSource};
pub use engine_state::{
    camera_state::Camera,
    load_world,
    rendering::{
        build_targets, cast_ray, trace_ray, trace_ray_in_world, Color, RayHit, Target, Texture,
        TextureLibrary, BACKGROUND,
    },
    save_frame,
    voxels::{
        block::{block_side::BlockSide, Block},
        world::{Coords, World},
        world_description::WorldDescription,
    },
    Frame, Renderer,
};
pub use error::RenderError;

/// Name of the stopwatch covering the whole run, as it appears in the logs.
pub const RENDER_STOPWATCH: &str = "Total render";

/// Renders the image described by the configuration file at `config_path`,
/// or by the default configuration when no path is given, and writes it out.
///
/// Logging goes to stdout and is filtered by `RUST_LOG`. The logger is only
/// installed by the first call; later calls reuse whatever logger is set.
pub fn run(config_path: Option<PathBuf>) -> Result<(), RenderError> {
    let mut log_builder = env_logger::Builder::new();
    if log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok()
    {
        info!("Logger initialized");
    }
    let start = web_time::Instant::now();

    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            RenderConfig::load(path)?
        }
        None => {
            info!("No configuration given, using defaults");
            let config = RenderConfig::default();
            config.validate()?;
            config
        }
    };

    let mut library = TextureLibrary::new();
    let world = load_world(&config.world, &mut library)?;
    let frame = Renderer::new(&config).render(&world)?;
    save_frame(&frame, &config.output)?;

    info!("{}: {:.2?}", RENDER_STOPWATCH, start.elapsed());
    Ok(())
}
