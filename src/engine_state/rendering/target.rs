//! # Targets
//!
//! A target is one face of one occupied cell, expressed as something a ray
//! can be tested against: an axis-aligned plane, the unit rectangle the face
//! covers within that plane, and the texture to sample when it is hit.
//!
//! The face list is derived data. It is rebuilt from the [`World`] at the
//! start of every render and then shared read-only by all workers.

use std::sync::Arc;

use crate::{
    core::geometry::{Point, Ray},
    engine_state::{
        rendering::texture::Texture,
        voxels::{
            block::block_side::{Axis, BlockSide},
            world::{Coords, World},
        },
    },
};

/// A bounded, oriented plane segment derived from one voxel face.
///
/// The plane is `a·x + b·y + c·z + d = 0` where exactly one of `a`, `b`, `c`
/// is nonzero (and equal to -1), so `d` is the face's position along its
/// axis. The rectangle `(x1, y1)–(x2, y2)` is given in the plane's local
/// coordinates: `(y, z)` for x-fixed planes, `(x, z)` for y-fixed planes and
/// `(x, y)` for z-fixed planes.
///
/// Positions are `i64` so the far faces of a cell at `i32::MAX` stay exact.
#[derive(Debug, Clone)]
pub struct Target {
    /// Coefficient of x.
    pub a: i32,
    /// Coefficient of y.
    pub b: i32,
    /// Coefficient of z.
    pub c: i32,
    /// Plane offset.
    pub d: i64,
    /// Lower local x of the face rectangle.
    pub x1: i64,
    /// Lower local y of the face rectangle.
    pub y1: i64,
    /// Upper local x of the face rectangle.
    pub x2: i64,
    /// Upper local y of the face rectangle.
    pub y2: i64,
    /// Texture sampled on a hit.
    pub texture: Arc<Texture>,
}

impl Target {
    /// Creates the target for one face of the cell at `coords`.
    pub fn new(coords: Coords, side: BlockSide, texture: Arc<Texture>) -> Self {
        let (x, y, z) = (i64::from(coords.x), i64::from(coords.y), i64::from(coords.z));
        let offset = i64::from(side.offset());
        match side.axis() {
            Axis::X => Target {
                a: -1,
                b: 0,
                c: 0,
                d: x + offset,
                x1: y,
                y1: z,
                x2: y + 1,
                y2: z + 1,
                texture,
            },

            Axis::Y => Target {
                a: 0,
                b: -1,
                c: 0,
                d: y + offset,
                x1: x,
                y1: z,
                x2: x + 1,
                y2: z + 1,
                texture,
            },

            Axis::Z => Target {
                a: 0,
                b: 0,
                c: -1,
                d: z + offset,
                x1: x,
                y1: y,
                x2: x + 1,
                y2: y + 1,
                texture,
            },
        }
    }

    /// The axis the plane is perpendicular to.
    #[inline]
    pub fn axis(&self) -> Axis {
        if self.a != 0 {
            Axis::X
        } else if self.b != 0 {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Distance along `ray` at which it crosses this target's plane.
    ///
    /// Returns `None` when the crossing is behind the origin or does not
    /// exist, i.e. the ray runs parallel to the plane and the solution is
    /// infinite or NaN.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let (a, b, c) = (self.a as f64, self.b as f64, self.c as f64);
        let o = ray.origin;
        let dir = ray.direction;
        let num = a * o.x + b * o.y + c * o.z + self.d as f64;
        let den = a * dir.x + b * dir.y + c * dir.z;
        let t = -num / den;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Projects a point of the plane onto the plane's local 2-D coordinates.
    #[inline]
    pub fn project(&self, point: Point) -> (f64, f64) {
        match self.axis() {
            Axis::X => (point.y, point.z),
            Axis::Y => (point.x, point.z),
            Axis::Z => (point.x, point.y),
        }
    }

    /// Whether local coordinates lie on the face, edges included.
    #[inline]
    pub fn contains(&self, flat_x: f64, flat_y: f64) -> bool {
        flat_x >= self.x1 as f64
            && flat_x <= self.x2 as f64
            && flat_y >= self.y1 as f64
            && flat_y <= self.y2 as f64
    }
}

/// Expands the world into its face list: six targets per occupied cell.
///
/// Cells are visited in ascending coordinate order and each cell emits its
/// faces in [`BlockSide::all`] order. Faces shared by two adjacent cells are
/// not merged; the hidden ones simply never win a nearest-hit test.
pub fn build_targets(world: &World) -> Vec<Target> {
    let mut targets = Vec::with_capacity(world.len() * 6);
    for (coords, block) in world.iter() {
        for side in BlockSide::all() {
            targets.push(Target::new(coords, side, block.texture(side).clone()));
        }
    }
    targets
}
