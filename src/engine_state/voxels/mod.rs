//! # Voxel Data
//!
//! Scene geometry for the tracer.
//!
//! * **Block**: the six face textures describing one voxel's appearance
//! * **World**: the sparse map from cell coordinates to blocks
//! * **World description**: the JSON file format worlds can be loaded from
//!
//! ## Thread Safety
//!
//! Blocks hold their textures through `Arc`, and nothing here is mutated
//! during a render, so the face list derived from a world can be read from
//! every worker thread without locks.

pub mod block;
pub mod world;
pub mod world_description;
