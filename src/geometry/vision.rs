//! Vision radii, range checks, and scan blocks

use crate::constants::{ELEVATION_RANGE_BONUS, SCAN_RADIUS};
use crate::core::types::GridPos;
use crate::geometry::los::has_line_of_sight;
use crate::map::GameMap;

/// Is the target within attack range?
///
/// High ground extends reach by one tile; distance is Manhattan.
pub fn is_in_range(
    attacker: GridPos,
    target: GridPos,
    base_range: u32,
    attacker_on_high_ground: bool,
) -> bool {
    let effective = if attacker_on_high_ground {
        base_range + ELEVATION_RANGE_BONUS
    } else {
        base_range
    };
    attacker.manhattan(&target) <= effective
}

/// All cells a viewer at `from` with the given vision radius can see
///
/// Candidates sit within Chebyshev distance of the viewer; each must be in
/// bounds with clear line of sight.
pub fn visible_tiles(from: GridPos, vision: u32, map: &GameMap) -> Vec<GridPos> {
    let r = vision as i32;
    let mut seen = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            let cell = GridPos::new(from.x + dx, from.y + dy);
            if map.in_bounds(cell) && has_line_of_sight(from, cell, map) {
                seen.push(cell);
            }
        }
    }
    seen
}

/// The 3x3 scan block centered on a cell, clamped to the board
///
/// Scans punch through walls: no line-of-sight filtering here.
pub fn scan_block(center: GridPos, map: &GameMap) -> Vec<GridPos> {
    let mut cells = Vec::new();
    for dy in -SCAN_RADIUS..=SCAN_RADIUS {
        for dx in -SCAN_RADIUS..=SCAN_RADIUS {
            let cell = GridPos::new(center.x + dx, center.y + dy);
            if map.in_bounds(cell) {
                cells.push(cell);
            }
        }
    }
    cells
}
