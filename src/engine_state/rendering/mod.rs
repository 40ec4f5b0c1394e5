//! Rendering system for the voxel ray tracer.
//!
//! This module turns a world into pixels: textures to sample, the face list
//! rays are tested against, the tracer itself, and the tasks that run the
//! tracer over bands of image rows.

pub mod target;
pub mod tasks;
pub mod texture;
pub mod tracer;

pub use target::{build_targets, Target};
pub use texture::{Texture, TextureLibrary};
pub use tracer::{cast_ray, trace_ray, trace_ray_in_world, Color, RayHit, BACKGROUND};
