//! # Render Configuration
//!
//! Everything that used to be a compile-time constant: output resolution,
//! view plane, where the world comes from, where the image goes and how much
//! parallelism to use. Loaded from JSON; every field is optional and falls
//! back to the defaults below.

use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    thread,
};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Default output width in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 800;
/// Default output height in pixels.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 600;
/// Default number of image rows traced by one task.
pub const DEFAULT_ROWS_PER_TASK: u32 = 16;

/// The view plane the camera shoots rays through.
///
/// It is perpendicular to the z axis, centred on it, `distance` away from the
/// camera, and `width` × `height` world units large.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Distance from the camera along +z.
    pub distance: f64,
    /// Horizontal extent in world units.
    pub width: f64,
    /// Vertical extent in world units.
    pub height: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            distance: 0.2,
            width: 0.4,
            height: 0.3,
        }
    }
}

/// Where the world to render comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldSource {
    /// The built-in grass scene, with `top.png`, `bottom.png` and `side.png`
    /// read from `texture_dir`.
    Demo {
        /// Directory holding the three grass textures.
        texture_dir: PathBuf,
    },
    /// A JSON world description.
    File {
        /// Path of the description file.
        path: PathBuf,
    },
}

impl Default for WorldSource {
    fn default() -> Self {
        WorldSource::Demo {
            texture_dir: PathBuf::from("textures/grass"),
        }
    }
}

/// All options of a render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub image_width: u32,
    /// Output height in pixels.
    pub image_height: u32,
    /// View plane geometry.
    pub screen: ScreenConfig,
    /// World to render.
    pub world: WorldSource,
    /// Output image path. The format follows the extension.
    pub output: PathBuf,
    /// Worker thread count; `None` uses the available parallelism.
    pub worker_threads: Option<usize>,
    /// Image rows traced per task.
    pub rows_per_task: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            screen: ScreenConfig::default(),
            world: WorldSource::default(),
            output: PathBuf::from("output.png"),
            worker_threads: None,
            rows_per_task: DEFAULT_ROWS_PER_TASK,
        }
    }
}

impl RenderConfig {
    /// Reads, parses and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RenderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RenderConfig =
            serde_json::from_str(&text).map_err(|source| RenderError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values describe a renderable image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be nonzero, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        let screen = &self.screen;
        for (name, value) in [
            ("screen.distance", screen.distance),
            ("screen.width", screen.width),
            ("screen.height", screen.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.rows_per_task == 0 {
            return Err(RenderError::InvalidConfig(
                "rows_per_task must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The number of worker threads to start, never less than one.
    pub fn resolved_worker_threads(&self) -> usize {
        match self.worker_threads {
            Some(0) => {
                log::warn!("worker_threads = 0 requested, using a single worker");
                1
            }
            Some(n) => n,
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}
