//! # World Module
//!
//! This module provides the `World` struct, a sparse map from integer cell
//! coordinates to the block occupying that cell.
//!
//! ## Architecture
//!
//! Only occupied cells are stored. A cell that is not in the map is empty
//! space: it has no geometry and is never hit by a ray. Every stored cell is a
//! fully opaque unit cube whose six faces are textured by its [`Block`].
//!
//! The world is read-only while a frame is being rendered; the renderer only
//! borrows it to build the face list once before the first ray is cast.
//!
//! ## World Sources
//!
//! - [`World::demo`] rebuilds the fixed grass scene from a texture directory
//! - [`super::world_description::WorldDescription`] loads a world from JSON

use std::{collections::BTreeMap, fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    engine_state::{
        rendering::texture::TextureLibrary,
        voxels::block::Block,
    },
    error::RenderError,
};

/// Integer coordinates of a unit voxel cell.
///
/// The cell `(x, y, z)` spans `[x, x + 1] × [y, y + 1] × [z, z + 1]` in world
/// space. Coordinates are ordered lexicographically on x, then y, then z.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Coords {
    /// Cell index along x.
    pub x: i32,
    /// Cell index along y.
    pub y: i32,
    /// Cell index along z.
    pub z: i32,
}

impl Coords {
    /// Creates cell coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Coords { x, y, z }
    }
}

impl From<[i32; 3]> for Coords {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Coords { x, y, z }
    }
}

impl From<Coords> for [i32; 3] {
    fn from(c: Coords) -> Self {
        [c.x, c.y, c.z]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Cells of the fixed demo scene.
pub const DEMO_CELLS: [Coords; 4] = [
    Coords::new(0, 0, 5),
    Coords::new(-2, -1, 4),
    Coords::new(1, -2, 3),
    Coords::new(1, 2, 5),
];

/// Represents a sparse voxel world.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use voxel_raytracer::{Block, Coords, Texture, World};
///
/// let stone = Arc::new(Texture::solid(4, 4, [128, 128, 128]));
/// let mut world = World::new();
/// world.insert(Coords::new(0, 0, 5), Block::uniform(stone));
///
/// assert!(world.get(Coords::new(0, 0, 5)).is_some());
/// assert!(world.get(Coords::new(0, 0, 6)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct World {
    cells: BTreeMap<Coords, Block>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World {
            cells: BTreeMap::new(),
        }
    }

    /// Builds the demo scene: four grass blocks floating in front of the camera.
    ///
    /// The textures are `top.png`, `bottom.png` and `side.png` inside
    /// `texture_dir`; the side texture is shared by all four vertical faces.
    ///
    /// # Errors
    /// Returns [`RenderError::TextureLoad`] if any of the three images is
    /// missing or cannot be decoded.
    pub fn demo<P: AsRef<Path>>(texture_dir: P, library: &mut TextureLibrary) -> Result<Self, RenderError> {
        let dir = texture_dir.as_ref();
        let top = library.get_or_load(dir.join("top.png"))?;
        let bottom = library.get_or_load(dir.join("bottom.png"))?;
        let side = library.get_or_load(dir.join("side.png"))?;
        let grass = Block::with_sides(top, bottom, side);

        let mut world = World::new();
        for coords in DEMO_CELLS {
            world.insert(coords, grass.clone());
        }
        Ok(world)
    }

    /// Places `block` at `coords`, returning the block previously there.
    pub fn insert(&mut self, coords: Coords, block: Block) -> Option<Block> {
        self.cells.insert(coords, block)
    }

    /// Empties the cell at `coords`, returning the block that occupied it.
    pub fn remove(&mut self, coords: Coords) -> Option<Block> {
        self.cells.remove(&coords)
    }

    /// Returns the block at `coords`, or `None` for empty space.
    pub fn get(&self, coords: Coords) -> Option<&Block> {
        self.cells.get(&coords)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over occupied cells in ascending coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coords, &Block)> + '_ {
        self.cells.iter().map(|(coords, block)| (*coords, block))
    }
}
