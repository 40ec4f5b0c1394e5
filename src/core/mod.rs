//! # Core Module
//!
//! Fundamental value types used throughout the renderer.
//!
//! ## Key Components
//! - `geometry`: points, vectors, 2-D rotation and rays

pub mod geometry;
