//! Background tasks for the rendering system.
//!
//! # Available Tasks
//! - `RowBandTask`: Traces a band of image rows on a worker thread

pub mod row_band_task;
