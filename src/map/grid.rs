//! Dense row-major tile grid

use serde::{Deserialize, Serialize};

use crate::core::types::GridPos;
use crate::map::tile::TileKind;

/// A generated battle board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    tiles: Vec<TileKind>,
}

impl GameMap {
    /// Create an all-floor board
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Floor; (width * height) as usize],
        }
    }

    /// Check if a coordinate is within board bounds
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    /// Tile at a coordinate, if in bounds
    pub fn tile(&self, pos: GridPos) -> Option<TileKind> {
        if self.in_bounds(pos) {
            Some(self.tiles[self.index(pos)])
        } else {
            None
        }
    }

    /// Set the tile at a coordinate (ignored out of bounds)
    pub fn set_tile(&mut self, pos: GridPos, kind: TileKind) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.tiles[idx] = kind;
        }
    }

    /// Is the tile at this coordinate a wall? Out of bounds reads as open.
    pub fn is_wall(&self, pos: GridPos) -> bool {
        self.tile(pos) == Some(TileKind::Wall)
    }

    /// Does this coordinate grant the elevation bonus?
    pub fn is_high_ground(&self, pos: GridPos) -> bool {
        self.tile(pos) == Some(TileKind::HighGround)
    }

    /// Clamp a coordinate onto the board
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        GridPos::new(
            pos.x.clamp(0, self.width - 1),
            pos.y.clamp(0, self.height - 1),
        )
    }

    /// Every coordinate on the board, row-major
    pub fn all_positions(&self) -> Vec<GridPos> {
        let mut cells = Vec::with_capacity((self.width * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                cells.push(GridPos::new(x, y));
            }
        }
        cells
    }
}
