//! Block Definitions
//!
//! Terrain cells store one `BlockType` each (one byte, `#[repr(u8)]` so the
//! renderer can read the raw buffer).

use serde::{Deserialize, Serialize};

pub type BlockId = u8;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    /// Decorative tufts drawn on top of grass. Not collidable.
    Grasses = 2,
    Stone = 3,
    Soil = 4,
    /// Level-editor filler; also returned for reads outside the terrain.
    Placeholder = 5,
}

pub const BLOCK_COUNT: usize = 6;

impl BlockType {
    pub const ALL: [BlockType; BLOCK_COUNT] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Grasses,
        BlockType::Stone,
        BlockType::Soil,
        BlockType::Placeholder,
    ];

    /// The one solidity predicate every collision query goes through.
    #[inline]
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockType::Air | BlockType::Grasses)
    }

    #[inline]
    pub fn id(self) -> BlockId {
        self as BlockId
    }

    #[inline]
    pub fn from_id(id: BlockId) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_air_and_grasses_are_passable() {
        let passable: Vec<_> = BlockType::ALL.iter().filter(|b| !b.is_solid()).collect();
        assert_eq!(passable, vec![&BlockType::Air, &BlockType::Grasses]);
    }

    #[test]
    fn ids_round_trip_and_reject_unknown() {
        for block in BlockType::ALL {
            assert_eq!(BlockType::from_id(block.id()), Some(block));
        }
        assert_eq!(BlockType::from_id(BLOCK_COUNT as u8), None);
    }
}
