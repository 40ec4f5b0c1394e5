//! # Ray Tracer
//!
//! Casts a single ray against the face list and returns what it sees.
//!
//! Every target is tested (there is no acceleration structure). A hit only
//! replaces the current best when it is strictly closer, so among faces at
//! exactly the same distance the one scanned first wins. With the face list
//! from [`super::target::build_targets`] that means the cell with the
//! smallest coordinates, and within a cell the earliest face in
//! [`crate::BlockSide::all`] order.

use crate::{
    core::geometry::Ray,
    engine_state::{
        rendering::{
            target::{build_targets, Target},
            texture::Texture,
        },
        voxels::{block::block_side::Axis, world::World},
    },
};

/// Distance kept between a texture coordinate and the far edge, so that
/// `floor(k * size)` never reaches `size`.
pub const EDGE_EPSILON: f64 = 1e-7;

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// A fully opaque color from an RGB triple.
    pub const fn opaque([r, g, b]: [u8; 3]) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// The color's RGB channels.
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Color returned for rays that hit nothing.
pub const BACKGROUND: Color = Color::opaque([0, 0, 0]);

/// The nearest face a ray hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Distance along the ray, in units of its direction vector.
    pub t: f64,
    /// Index of the hit face in the target list.
    pub target: usize,
    /// Texture pixel that was sampled, as `(x, y)`.
    pub texel: (u32, u32),
    /// The sampled color.
    pub color: Color,
}

/// Clamps a rectangle-local coordinate into `[0, 1 - EDGE_EPSILON]`.
///
/// NaN is treated as 0 so the result is always a valid fraction.
#[inline]
pub fn clamp_fraction(k: f64) -> f64 {
    if !(k >= 0.0) {
        0.0
    } else if k >= 1.0 {
        1.0 - EDGE_EPSILON
    } else {
        k
    }
}

/// Maps rectangle-local offsets to texture fractions for a face perpendicular to `axis`.
///
/// The convention keeps textures upright on the four vertical faces:
/// - x-fixed faces use `(z, 1 - y)`
/// - y-fixed faces use `(x, z)` unchanged
/// - z-fixed faces use `(x, 1 - y)`
#[inline]
pub fn texture_fraction(axis: Axis, local_x: f64, local_y: f64) -> (f64, f64) {
    let kx = clamp_fraction(local_x);
    let ky = clamp_fraction(local_y);
    match axis {
        Axis::X => (ky, 1.0 - EDGE_EPSILON - kx),
        Axis::Y => (kx, ky),
        Axis::Z => (kx, 1.0 - EDGE_EPSILON - ky),
    }
}

/// Converts texture fractions into a pixel position of `texture`.
///
/// The result is always inside the texture, whatever the input.
#[inline]
pub fn texel_index(texture: &Texture, kx: f64, ky: f64) -> (u32, u32) {
    let px = (kx * texture.width() as f64) as u32;
    let py = (ky * texture.height() as f64) as u32;
    (px.min(texture.width() - 1), py.min(texture.height() - 1))
}

/// Finds the nearest face hit by `ray`, if any.
pub fn cast_ray(ray: &Ray, targets: &[Target]) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;

    for (index, target) in targets.iter().enumerate() {
        let Some(t) = target.intersect(ray) else {
            continue;
        };
        if best.as_ref().is_some_and(|hit| t >= hit.t) {
            continue;
        }

        let (flat_x, flat_y) = target.project(ray.at(t));
        if !target.contains(flat_x, flat_y) {
            continue;
        }

        let (kx, ky) = texture_fraction(
            target.axis(),
            flat_x - target.x1 as f64,
            flat_y - target.y1 as f64,
        );
        let texel = texel_index(&target.texture, kx, ky);
        let color = Color::opaque(target.texture.pixel(texel.0, texel.1));

        best = Some(RayHit {
            t,
            target: index,
            texel,
            color,
        });
    }

    best
}

/// Returns the color seen along `ray`, or [`BACKGROUND`] if nothing is hit.
#[inline]
pub fn trace_ray(ray: &Ray, targets: &[Target]) -> Color {
    cast_ray(ray, targets).map_or(BACKGROUND, |hit| hit.color)
}

/// Traces a single ray directly against a world.
///
/// This rebuilds the face list on every call; renders should build it once
/// with [`build_targets`] and use [`trace_ray`] instead.
pub fn trace_ray_in_world(ray: &Ray, world: &World) -> Color {
    trace_ray(ray, &build_targets(world))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use image::{Rgb, RgbImage};

    use super::*;
    use crate::{
        core::geometry::{Direction, Point},
        engine_state::voxels::{
            block::{block_side::BlockSide, Block},
            world::Coords,
        },
    };

    #[test]
    fn clamp_keeps_fractions_below_one() {
        assert_eq!(clamp_fraction(-0.5), 0.0);
        assert_eq!(clamp_fraction(0.25), 0.25);
        assert_eq!(clamp_fraction(1.0), 1.0 - EDGE_EPSILON);
        assert_eq!(clamp_fraction(3.0), 1.0 - EDGE_EPSILON);
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn texel_index_stays_in_bounds_near_the_far_edge() {
        let sizes = [1u32, 2, 3, 16, 17, 800, 4096];
        let locals = [0.0, 0.5, 0.999_999_9, 0.999_999_999_999, 1.0, 1.0 + 1e-12];
        for &w in &sizes {
            for &h in &sizes {
                let texture = Texture::solid(w, h, [0, 0, 0]);
                for axis in [Axis::X, Axis::Y, Axis::Z] {
                    for &lx in &locals {
                        for &ly in &locals {
                            let (kx, ky) = texture_fraction(axis, lx, ly);
                            let (px, py) = texel_index(&texture, kx, ky);
                            assert!(px < w && py < h, "{w}x{h} {axis:?} ({lx}, {ly})");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn orientation_convention_per_axis() {
        let e = 1.0 - EDGE_EPSILON;
        assert_eq!(texture_fraction(Axis::Y, 0.25, 0.75), (0.25, 0.75));
        assert_eq!(texture_fraction(Axis::Z, 0.25, 0.75), (0.25, e - 0.75));
        assert_eq!(texture_fraction(Axis::X, 0.25, 0.75), (0.75, e - 0.25));
    }

    #[test]
    fn hit_reports_distance_face_and_texel() {
        let image = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8 * 100, y as u8 * 100, 1]));
        let mut world = World::new();
        world.insert(
            Coords::new(0, 0, 5),
            Block::uniform(Arc::new(Texture::from_image(image))),
        );
        let targets = build_targets(&world);

        let ray = Ray::new(Point::new(0.5, 0.5, 0.0), Direction::new(0.0, 0.0, 1.0));
        let hit = cast_ray(&ray, &targets).unwrap();

        assert!((hit.t - 5.0).abs() < 1e-12);
        assert_eq!(hit.target, BlockSide::FRONT as usize);
        assert_eq!(hit.texel, (1, 1));
        assert_eq!(hit.color, Color::opaque([100, 100, 1]));
    }

    #[test]
    fn first_scanned_target_wins_an_exact_tie() {
        let coords = Coords::new(0, 0, 5);
        let red = Arc::new(Texture::solid(1, 1, [255, 0, 0]));
        let blue = Arc::new(Texture::solid(1, 1, [0, 0, 255]));
        let ray = Ray::new(Point::new(0.5, 0.5, 0.0), Direction::new(0.0, 0.0, 1.0));

        let targets = vec![
            Target::new(coords, BlockSide::FRONT, red.clone()),
            Target::new(coords, BlockSide::FRONT, blue.clone()),
        ];
        assert_eq!(trace_ray(&ray, &targets), Color::opaque([255, 0, 0]));

        let reversed = vec![
            Target::new(coords, BlockSide::FRONT, blue),
            Target::new(coords, BlockSide::FRONT, red),
        ];
        assert_eq!(trace_ray(&ray, &reversed), Color::opaque([0, 0, 255]));
    }

    #[test]
    fn no_targets_means_background() {
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Direction::new(0.1, 0.2, 1.0));
        assert_eq!(trace_ray(&ray, &[]), BACKGROUND);
        assert_eq!(BACKGROUND, Color { r: 0, g: 0, b: 0, a: 255 });
    }
}
