//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use image::{Rgb, RgbImage};
use voxel_raytracer::{core::geometry::Point, Block, Coords, Texture, World};

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
pub const GREY: [u8; 3] = [128, 128, 128];

/// A fresh directory under the system temp dir, unique per test and process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "voxel-raytracer-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn solid(color: [u8; 3]) -> Arc<Texture> {
    Arc::new(Texture::solid(4, 4, color))
}

/// A 2×2 texture: red top-left, green top-right, blue bottom-left, grey bottom-right.
pub fn marker() -> Arc<Texture> {
    let image = RgbImage::from_fn(2, 2, |x, y| match (x, y) {
        (0, 0) => Rgb(RED),
        (1, 0) => Rgb(GREEN),
        (0, 1) => Rgb(BLUE),
        _ => Rgb(GREY),
    });
    Arc::new(Texture::from_image(image))
}

/// A 3×3 texture whose pixel `(x, y)` is `[x * 100, y * 100, 7]`.
pub fn gradient() -> Arc<Texture> {
    let image = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8 * 100, y as u8 * 100, 7]));
    Arc::new(Texture::from_image(image))
}

pub fn world_with(cells: &[(Coords, Block)]) -> World {
    let mut world = World::new();
    for (coords, block) in cells {
        world.insert(*coords, block.clone());
    }
    world
}

pub fn p(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

pub fn sample_pixel(frame: &RgbImage, x: u32, y: u32) -> [u8; 3] {
    frame.get_pixel(x, y).0
}
