//! Grid geometry: distances, line of sight, vision sets

pub mod los;
pub mod vision;

pub use los::has_line_of_sight;
pub use vision::{is_in_range, scan_block, visible_tiles};

use crate::core::types::{Facing, GridPos};

/// Manhattan distance between two cells
pub fn manhattan_distance(a: GridPos, b: GridPos) -> u32 {
    a.manhattan(&b)
}

/// Facing after moving or attacking from one cell toward another
///
/// East-west displacement is checked before north-south; None when the
/// cells coincide.
pub fn facing_toward(from: GridPos, to: GridPos) -> Option<Facing> {
    if to.x > from.x {
        Some(Facing::East)
    } else if to.x < from.x {
        Some(Facing::West)
    } else if to.y > from.y {
        Some(Facing::South)
    } else if to.y < from.y {
        Some(Facing::North)
    } else {
        None
    }
}
