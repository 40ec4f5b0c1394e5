//! # World Description
//!
//! JSON form of a [`World`]: a table of named textures, a table of named
//! blocks built from those textures, and the list of occupied cells.
//!
//! ```json
//! {
//!   "textures": { "grass_top": "grass/top.png", "dirt": "dirt.png", "grass_side": "grass/side.png" },
//!   "blocks":   { "grass": { "top": "grass_top", "bottom": "dirt", "sides": "grass_side" } },
//!   "cells":    [ { "at": [0, 0, 5], "block": "grass" } ]
//! }
//! ```
//!
//! Texture paths are relative to the directory holding the description file.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
    engine_state::{
        rendering::texture::{Texture, TextureLibrary},
        voxels::{
            block::{block_side::BlockSide, Block},
            world::{Coords, World},
        },
    },
    error::RenderError,
};

/// Face textures of one named block, by texture name.
///
/// Vertical faces fall back to `sides`, then `all`. The top and bottom fall
/// back to `all`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlockDescription {
    /// Texture for every face not named otherwise.
    pub all: Option<String>,
    /// Texture for the four vertical faces not named otherwise.
    pub sides: Option<String>,
    /// Texture of the upper y face.
    pub top: Option<String>,
    /// Texture of the lower y face.
    pub bottom: Option<String>,
    /// Texture of the lower x face.
    pub left: Option<String>,
    /// Texture of the upper x face.
    pub right: Option<String>,
    /// Texture of the lower z face.
    pub front: Option<String>,
    /// Texture of the upper z face.
    pub back: Option<String>,
}

impl BlockDescription {
    /// The texture name for `side` after applying the fallbacks.
    pub fn texture_name(&self, side: BlockSide) -> Option<&str> {
        let explicit = match side {
            BlockSide::LEFT => &self.left,
            BlockSide::RIGHT => &self.right,
            BlockSide::BOTTOM => &self.bottom,
            BlockSide::TOP => &self.top,
            BlockSide::FRONT => &self.front,
            BlockSide::BACK => &self.back,
        };
        let vertical = match side {
            BlockSide::TOP | BlockSide::BOTTOM => None,
            _ => self.sides.as_ref(),
        };
        explicit
            .as_ref()
            .or(vertical)
            .or(self.all.as_ref())
            .map(String::as_str)
    }
}

/// One occupied cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellDescription {
    /// Cell coordinates as `[x, y, z]`.
    pub at: Coords,
    /// Name of the block in [`WorldDescription::blocks`].
    pub block: String,
}

/// A world as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldDescription {
    /// Texture name to image path.
    pub textures: BTreeMap<String, PathBuf>,
    /// Block name to face textures.
    pub blocks: BTreeMap<String, BlockDescription>,
    /// Occupied cells. A later entry for the same coordinates wins.
    pub cells: Vec<CellDescription>,
}

impl WorldDescription {
    /// Reads and parses a description file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RenderError::WorldRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| RenderError::WorldParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the world stored at `path`, decoding its textures through `library`.
    pub fn load_world<P: AsRef<Path>>(path: P, library: &mut TextureLibrary) -> Result<World, RenderError> {
        let path = path.as_ref();
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        WorldDescription::read(path)?.build(base_dir, library)
    }

    /// Resolves every name and builds the world.
    ///
    /// Relative texture paths are joined onto `base_dir`. Only blocks that are
    /// used by at least one cell have their textures loaded, and only textures
    /// referenced by such blocks are decoded.
    pub fn build(&self, base_dir: &Path, library: &mut TextureLibrary) -> Result<World, RenderError> {
        let mut blocks: HashMap<&str, Block> = HashMap::new();
        let mut world = World::new();

        for cell in &self.cells {
            let block = match blocks.get(cell.block.as_str()) {
                Some(block) => block.clone(),
                None => {
                    let description =
                        self.blocks
                            .get(&cell.block)
                            .ok_or_else(|| RenderError::UnknownBlock {
                                at: cell.at,
                                name: cell.block.clone(),
                            })?;
                    let block = self.build_block(&cell.block, description, base_dir, library)?;
                    blocks.insert(cell.block.as_str(), block.clone());
                    block
                }
            };
            world.insert(cell.at, block);
        }

        Ok(world)
    }

    fn build_block(
        &self,
        name: &str,
        description: &BlockDescription,
        base_dir: &Path,
        library: &mut TextureLibrary,
    ) -> Result<Block, RenderError> {
        let mut face = |side: BlockSide| -> Result<Arc<Texture>, RenderError> {
            let texture_name = description
                .texture_name(side)
                .ok_or_else(|| RenderError::MissingFace {
                    block: name.to_string(),
                    side,
                })?;
            let relative = self
                .textures
                .get(texture_name)
                .ok_or_else(|| RenderError::UnknownTexture {
                    block: name.to_string(),
                    name: texture_name.to_string(),
                })?;
            library.get_or_load(base_dir.join(relative))
        };

        Ok(Block {
            top: face(BlockSide::TOP)?,
            bottom: face(BlockSide::BOTTOM)?,
            left: face(BlockSide::LEFT)?,
            right: face(BlockSide::RIGHT)?,
            front: face(BlockSide::FRONT)?,
            back: face(BlockSide::BACK)?,
        })
    }
}
