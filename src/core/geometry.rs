//! # Geometry Primitives
//!
//! Value types used by the tracer. Points and vectors come straight from
//! `cgmath` in double precision, which already provides componentwise
//! addition, subtraction, negation and scalar scaling. This module adds the
//! few operations the renderer needs on top of them.

use cgmath::{Basis2, Rad, Rotation, Rotation2};

pub use cgmath::{Point3, Vector2, Vector3, Vector4};

/// A 3-D position in world space.
pub type Point = Point3<f64>;

/// A 3-D direction or offset in world space.
pub type Direction = Vector3<f64>;

/// Returns `v` rotated counter-clockwise by `angle` in its own plane.
pub fn rotated<A: Into<Rad<f64>>>(v: Vector2<f64>, angle: A) -> Vector2<f64> {
    let rotation: Basis2<f64> = Rotation2::from_angle(angle.into());
    rotation.rotate_vector(v)
}

/// A half-line starting at `origin` and extending along `direction`.
///
/// The direction does not need to be normalized. Distances reported along a
/// ray are in units of `direction`, so `at(1.0)` is `origin + direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Where the ray starts.
    pub origin: Point,
    /// Where the ray is heading.
    pub direction: Direction,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    pub fn new(origin: Point, direction: Direction) -> Self {
        Ray { origin, direction }
    }

    /// Creates the ray starting at `from` that passes through `through` at `t = 1`.
    pub fn through(from: Point, through: Point) -> Self {
        Ray {
            origin: from,
            direction: through - from,
        }
    }

    /// Returns the point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}
