//! Coordinate-keyed occupancy index over the unit list
//!
//! Collision, adjacency, and overwatch queries hit this index instead of
//! rescanning the whole list. Rebuilt per action from the snapshot; at most
//! one unit legally occupies a cell, so later entries win only in the
//! transient stacked states a reboot event can produce.

use ahash::AHashMap;

use crate::core::types::{GridPos, UnitId};
use crate::units::Unit;

/// Occupancy index: which unit stands on which cell
#[derive(Debug, Default)]
pub struct UnitGrid {
    cells: AHashMap<GridPos, UnitId>,
}

impl UnitGrid {
    /// Build the index from the live unit list
    pub fn build(units: &[Unit]) -> Self {
        let mut cells = AHashMap::with_capacity(units.len());
        for unit in units {
            cells.insert(unit.pos, unit.id);
        }
        Self { cells }
    }

    /// Who stands on this cell?
    pub fn occupant(&self, pos: GridPos) -> Option<UnitId> {
        self.cells.get(&pos).copied()
    }

    /// Is the cell taken by any unit other than `mover`?
    pub fn is_occupied_by_other(&self, pos: GridPos, mover: UnitId) -> bool {
        matches!(self.occupant(pos), Some(id) if id != mover)
    }
}
