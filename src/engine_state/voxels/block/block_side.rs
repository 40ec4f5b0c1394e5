//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the axis each of
//! them is perpendicular to. The tracer uses the axis to pick the plane's
//! local 2-D coordinates and the texture orientation convention.

use std::fmt;

/// The world axis a face is perpendicular to.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Axis {
    /// Faces with a fixed x coordinate (left and right).
    X,
    /// Faces with a fixed y coordinate (bottom and top).
    Y,
    /// Faces with a fixed z coordinate (front and back).
    Z,
}

/// Represents the six possible faces of a voxel block.
///
/// The camera looks toward increasing z, so the front face is the one at the
/// lower z of a cell and is the face seen head-on by the default camera.
///
/// The order is: [LEFT, RIGHT, BOTTOM, TOP, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (at the cell's lower x)
    LEFT = 0,

    /// The right face (at the cell's upper x)
    RIGHT = 1,

    /// The bottom face (at the cell's lower y)
    BOTTOM = 2,

    /// The top face (at the cell's upper y)
    TOP = 3,

    /// The front face (at the cell's lower z)
    FRONT = 4,

    /// The back face (at the cell's upper z)
    BACK = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// This is also the order in which the face-list builder emits the faces
    /// of a cell, which matters for breaking exact distance ties.
    /// The order is: [LEFT, RIGHT, BOTTOM, TOP, FRONT, BACK]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// The axis this face is perpendicular to.
    pub fn axis(self) -> Axis {
        match self {
            BlockSide::LEFT | BlockSide::RIGHT => Axis::X,
            BlockSide::BOTTOM | BlockSide::TOP => Axis::Y,
            BlockSide::FRONT | BlockSide::BACK => Axis::Z,
        }
    }

    /// Offset of the face plane from the cell's lower corner along [`Self::axis`].
    ///
    /// Lower faces sit at offset 0, upper faces at offset 1.
    pub fn offset(self) -> i32 {
        match self {
            BlockSide::LEFT | BlockSide::BOTTOM | BlockSide::FRONT => 0,
            BlockSide::RIGHT | BlockSide::TOP | BlockSide::BACK => 1,
        }
    }

    /// Lowercase name as used in world description files.
    pub fn name(self) -> &'static str {
        match self {
            BlockSide::LEFT => "left",
            BlockSide::RIGHT => "right",
            BlockSide::BOTTOM => "bottom",
            BlockSide::TOP => "top",
            BlockSide::FRONT => "front",
            BlockSide::BACK => "back",
        }
    }
}

impl fmt::Display for BlockSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
