//! # Camera Implementation
//!
//! A fixed pinhole camera: it sits at the world origin, looks toward
//! increasing z with +y up, and shoots one ray per output pixel through a
//! view plane placed `distance` in front of it.
//!
//! For pixel `(x, y)` of a `W × H` image the ray passes through
//!
//! ```text
//! wx =   x / W * screen_width  - screen_width  / 2
//! wy = -(y / H * screen_height - screen_height / 2)
//! wz =   screen_distance
//! ```
//!
//! so image row 0 is the top of the view plane. Each pixel is sampled at its
//! top-left corner; there is no jitter and no anti-aliasing.

use crate::{
    config::{RenderConfig, ScreenConfig},
    core::geometry::{Point, Ray},
};

/// Maps output pixels to camera rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Point,
    /// View plane geometry
    pub screen: ScreenConfig,
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
}

impl Camera {
    /// Creates the camera at the origin for the given view plane and resolution.
    pub fn new(screen: ScreenConfig, image_width: u32, image_height: u32) -> Self {
        Self {
            position: Point::new(0.0, 0.0, 0.0),
            screen,
            image_width,
            image_height,
        }
    }

    /// Creates the camera described by a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.screen, config.image_width, config.image_height)
    }

    /// The point on the view plane that pixel `(x, y)` looks through.
    pub fn view_plane_point(&self, x: u32, y: u32) -> Point {
        let ScreenConfig {
            distance,
            width,
            height,
        } = self.screen;
        let wx = x as f64 / self.image_width as f64 * width - width / 2.0;
        let wy = -(y as f64 / self.image_height as f64 * height - height / 2.0);
        Point::new(wx, wy, distance)
    }

    /// The ray for pixel `(x, y)`.
    ///
    /// Its direction is the offset from the camera to the view plane point,
    /// so `t = 1` lies on the view plane.
    #[inline]
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        Ray::through(self.position, self.view_plane_point(x, y))
    }
}
