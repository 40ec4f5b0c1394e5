//! # Camera State
//!
//! The renderer's single, fixed camera. It is axis-aligned and never moves,
//! so the whole state is the view plane and the output resolution.

pub mod camera;

pub use camera::Camera;
