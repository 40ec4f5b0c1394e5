//! Task that traces a contiguous band of image rows on a worker thread.
//!
//! The band reads only shared, immutable data (the face list and the
//! textures it references) and returns its pixels; the result copies them
//! into the frame on the driving thread.

use std::sync::Arc;

use image::{Rgb, RgbImage};

use crate::engine_state::{
    camera_state::Camera,
    rendering::{
        target::Target,
        tracer::trace_ray,
    },
    task_management::task::{Task, TaskResult},
};

/// Traces rows `first_row .. first_row + num_rows` of the image.
pub struct RowBandTask {
    /// Face list shared by every band of the render
    targets: Arc<[Target]>,
    /// Pixel to ray mapping
    camera: Camera,
    /// First image row of the band
    first_row: u32,
    /// Number of rows in the band
    num_rows: u32,
}

impl RowBandTask {
    /// Creates a band task. The band must lie inside the camera's image.
    pub fn new(targets: Arc<[Target]>, camera: Camera, first_row: u32, num_rows: u32) -> Self {
        debug_assert!(first_row + num_rows <= camera.image_height);
        RowBandTask {
            targets,
            camera,
            first_row,
            num_rows,
        }
    }

    /// Splits an image of `image_height` rows into `(first_row, num_rows)`
    /// bands of at most `rows_per_band` rows.
    pub fn bands(image_height: u32, rows_per_band: u32) -> impl Iterator<Item = (u32, u32)> {
        let rows_per_band = rows_per_band.max(1);
        (0..image_height)
            .step_by(rows_per_band as usize)
            .map(move |first_row| (first_row, rows_per_band.min(image_height - first_row)))
    }

    /// Traces the band into a standalone image of `image_width × num_rows`.
    pub fn trace(&self) -> RgbImage {
        let width = self.camera.image_width;
        RgbImage::from_fn(width, self.num_rows, |x, row| {
            let ray = self.camera.ray_for_pixel(x, self.first_row + row);
            Rgb(trace_ray(&ray, &self.targets).rgb())
        })
    }
}

impl Task for RowBandTask {
    fn process(&self) -> Box<dyn TaskResult + Send> {
        Box::new(RowBandResult {
            first_row: self.first_row,
            pixels: self.trace(),
        })
    }
}

/// The traced pixels of one band.
pub struct RowBandResult {
    /// First image row of the band
    first_row: u32,
    /// Traced pixels, one image row per band row
    pixels: RgbImage,
}

impl TaskResult for RowBandResult {
    fn handle_result(self: Box<Self>, frame: &mut RgbImage) {
        log::debug!(
            "Rows {}..{} done",
            self.first_row,
            self.first_row + self.pixels.height()
        );
        for (x, row, pixel) in self.pixels.enumerate_pixels() {
            frame.put_pixel(x, self.first_row + row, *pixel);
        }
    }
}
