//! # Task System Core Traits
//!
//! This module defines the two halves of a unit of background work.
//!
//! ## Task Lifecycle
//! 1. A `Task` is created and scheduled via `TaskManager::publish_task()`
//! 2. The task's `process()` method is called on a worker thread
//! 3. The task returns a boxed `TaskResult`
//! 4. The result's `handle_result()` is called on the driving thread, which
//!    owns the frame being assembled
//!
//! ## Thread Safety
//! - `Task` must be `Send` to be transferred to a worker
//! - `TaskResult` must be `Send` to be transferred back
//! - Tasks only read shared data (`Arc`ed targets and textures); the frame is
//!   only ever written by results, on the driving thread

use image::RgbImage;

/// A unit of work executed on a worker thread.
///
/// Tasks should own (or share through `Arc`) all the data they need and be
/// coarse enough to amortize the channel round trip.
pub trait Task: Send {
    /// Performs the work and returns a result for the driving thread.
    ///
    /// Runs on a worker thread. Must not block on anything but its own
    /// computation.
    fn process(&self) -> Box<dyn TaskResult + Send>;
}

/// The outcome of a [`Task`], applied on the driving thread.
pub trait TaskResult: Send {
    /// Writes the result into the frame being assembled.
    fn handle_result(self: Box<Self>, frame: &mut RgbImage);
}
