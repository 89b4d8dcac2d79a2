//! Tile kinds and their effects

use serde::{Deserialize, Serialize};

/// Kind of a single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    /// Grants attackers +1 range and a flat damage bonus
    HighGround,
}

impl TileKind {
    /// Does this tile block unit movement?
    pub fn blocks_movement(&self) -> bool {
        matches!(self, TileKind::Wall)
    }

    /// Does this tile block line of sight?
    pub fn blocks_los(&self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_walls_block() {
        assert!(TileKind::Wall.blocks_movement());
        assert!(TileKind::Wall.blocks_los());
        assert!(!TileKind::Floor.blocks_movement());
        assert!(!TileKind::HighGround.blocks_los());
    }
}
