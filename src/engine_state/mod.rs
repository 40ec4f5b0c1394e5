//! # Engine State Module
//!
//! The core module that turns a world into a finished image.
//!
//! ## Key Components
//!
//! * `Renderer` - Drives one render: face list, row bands, frame assembly
//! * `camera_state` - The fixed pinhole camera and its view plane
//! * `rendering` - Textures, face list, tracer and row band tasks
//! * `task_management` - Worker pool the row bands run on
//! * `voxels` - Blocks, the sparse world and its file format
//!
//! ## Data Flow
//!
//! World → face list (built once, shared as `Arc<[Target]>`) → one
//! `RowBandTask` per band of rows → worker pool → band results copied into
//! the frame on the driving thread.

use std::{path::Path, sync::Arc};

use image::RgbImage;
use log::info;
use web_time::Instant;

use crate::{
    config::{RenderConfig, WorldSource},
    error::RenderError,
};
use camera_state::Camera;
use rendering::{
    target::{build_targets, Target},
    tasks::row_band_task::RowBandTask,
    texture::TextureLibrary,
};
use task_management::TaskManager;
use voxels::{world::World, world_description::WorldDescription};

pub mod camera_state;
pub mod rendering;
pub mod task_management;
pub mod voxels;

/// A rendered image: 8-bit RGB, row 0 at the top.
pub type Frame = RgbImage;

/// Renders worlds into frames on a pool of worker threads.
///
/// The pool is started once and reused by every call to [`Renderer::render`].
pub struct Renderer {
    /// Pixel to ray mapping
    camera: Camera,
    /// Rows traced per task
    rows_per_task: u32,
    /// Worker pool
    task_manager: TaskManager,
}

impl Renderer {
    /// Creates a renderer for the resolution, view plane and parallelism in `config`.
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_camera(
            Camera::from_config(config),
            config.rows_per_task,
            config.resolved_worker_threads(),
        )
    }

    /// Creates a renderer from its parts.
    pub fn with_camera(camera: Camera, rows_per_task: u32, num_workers: usize) -> Self {
        Renderer {
            camera,
            rows_per_task: rows_per_task.max(1),
            task_manager: TaskManager::new(num_workers),
        }
    }

    /// The camera used for every render.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Traces one ray per pixel through `world` and returns the assembled frame.
    ///
    /// The face list is built once up front and shared by all workers. The
    /// result does not depend on the number of workers or the band size.
    ///
    /// # Errors
    /// Returns [`RenderError::WorkerDisconnected`] if a worker dies; no
    /// partial frame is returned.
    pub fn render(&mut self, world: &World) -> Result<Frame, RenderError> {
        let start = Instant::now();
        let width = self.camera.image_width;
        let height = self.camera.image_height;

        let targets: Arc<[Target]> = build_targets(world).into();
        info!(
            "Rendering {}x{}: {} cells, {} targets, {} workers",
            width,
            height,
            world.len(),
            targets.len(),
            self.task_manager.num_workers()
        );

        let mut frame = Frame::new(width, height);
        for (first_row, num_rows) in RowBandTask::bands(height, self.rows_per_task) {
            self.task_manager.publish_task(Box::new(RowBandTask::new(
                targets.clone(),
                self.camera,
                first_row,
                num_rows,
            )));
        }
        let bands = self.task_manager.wait_for_completion(&mut frame)?;

        info!(
            "Rendered {} bands in {:.2?}",
            bands,
            start.elapsed()
        );
        Ok(frame)
    }
}

/// Builds the world a configuration asks for.
pub fn load_world(source: &WorldSource, library: &mut TextureLibrary) -> Result<World, RenderError> {
    let world = match source {
        WorldSource::Demo { texture_dir } => World::demo(texture_dir, library)?,
        WorldSource::File { path } => WorldDescription::load_world(path, library)?,
    };
    info!(
        "Loaded world with {} cells and {} textures",
        world.len(),
        library.len()
    );
    Ok(world)
}

/// Writes a frame to `path`; the image format follows the file extension.
pub fn save_frame<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<(), RenderError> {
    let path = path.as_ref();
    frame.save(path).map_err(|source| RenderError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}
