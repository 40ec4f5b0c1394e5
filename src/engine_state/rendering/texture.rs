//! Texture handling for the tracer.
//!
//! This module provides the immutable RGB pixel grids sampled by the tracer,
//! and a small library that makes sure every image file is decoded once and
//! then shared by every block face that references it.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use image::{Rgb, RgbImage};

use crate::error::RenderError;

/// An immutable grid of 8-bit RGB samples.
///
/// Textures are created once per image asset and shared through `Arc`, so they
/// can be read from every worker thread without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    image: RgbImage,
}

impl Texture {
    /// Wraps an already decoded image.
    ///
    /// Use `Texture::try_from` for images that may be empty.
    ///
    /// # Panics
    /// Panics if the image has a zero width or height, since such a texture
    /// has no pixel the tracer could sample.
    pub fn from_image(image: RgbImage) -> Self {
        assert!(
            image.width() > 0 && image.height() > 0,
            "texture must have at least one pixel"
        );
        Texture { image }
    }

    /// Creates a texture where every pixel has the same color.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn solid(width: u32, height: u32, color: [u8; 3]) -> Self {
        Texture::from_image(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    /// Decodes the image file at `path` into a texture.
    ///
    /// # Errors
    /// Returns [`RenderError::TextureLoad`] if the file is missing or cannot be
    /// decoded, and [`RenderError::EmptyTexture`] if it has no pixels.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| RenderError::TextureLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let texture = Texture::try_from(image).map_err(|_| RenderError::EmptyTexture {
            path: path.to_path_buf(),
        })?;

        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );
        Ok(texture)
    }

    /// Width in pixels. Always at least 1.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels. Always at least 1.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the RGB triple at pixel `(x, y)`, with row 0 at the top.
    ///
    /// Indices past the edge are clamped to the last row or column.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width() - 1);
        let y = y.min(self.height() - 1);
        self.image.get_pixel(x, y).0
    }
}

impl TryFrom<RgbImage> for Texture {
    type Error = RenderError;

    /// Wraps `image`, or returns [`RenderError::EmptyImage`] if it has no pixels.
    fn try_from(image: RgbImage) -> Result<Self, Self::Error> {
        if image.width() == 0 || image.height() == 0 {
            return Err(RenderError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Texture { image })
    }
}

/// Loads textures by path, decoding each distinct file only once.
///
/// Every request for the same path returns a clone of the same `Arc`, so
/// blocks that reuse an image share its pixel data instead of copying it.
#[derive(Debug, Default)]
pub struct TextureLibrary {
    textures: HashMap<PathBuf, Arc<Texture>>,
}

impl TextureLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared texture for `path`, loading it on first use.
    pub fn get_or_load<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<Texture>, RenderError> {
        let path = path.as_ref();
        if let Some(texture) = self.textures.get(path) {
            return Ok(texture.clone());
        }

        let texture = Arc::new(Texture::load(path)?);
        self.textures.insert(path.to_path_buf(), texture.clone());
        Ok(texture)
    }

    /// Number of distinct textures decoded so far.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no texture has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
