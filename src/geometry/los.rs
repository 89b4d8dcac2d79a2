//! Bresenham line of sight
//!
//! Walls block sight; units never do. Endpoints are not tested: a unit
//! always sees out of its own tile and can be seen standing on its own.

use crate::core::types::GridPos;
use crate::map::GameMap;

/// Integer Bresenham walk from `from` to `to`, failing on any intermediate
/// wall
pub fn has_line_of_sight(from: GridPos, to: GridPos, map: &GameMap) -> bool {
    let mut x0 = from.x;
    let mut y0 = from.y;
    let x1 = to.x;
    let y1 = to.y;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    while x0 != x1 || y0 != y1 {
        if (x0, y0) != (from.x, from.y)
            && (x0, y0) != (to.x, to.y)
            && map.is_wall(GridPos::new(x0, y0))
        {
            return false;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileKind;

    #[test]
    fn test_clear_straight_line() {
        let map = GameMap::new(12, 12);
        assert!(has_line_of_sight(
            GridPos::new(0, 0),
            GridPos::new(5, 0),
            &map
        ));
    }

    #[test]
    fn test_wall_blocks_line() {
        let mut map = GameMap::new(12, 12);
        map.set_tile(GridPos::new(3, 0), TileKind::Wall);
        assert!(!has_line_of_sight(
            GridPos::new(0, 0),
            GridPos::new(5, 0),
            &map
        ));
    }

    #[test]
    fn test_endpoints_never_block() {
        let mut map = GameMap::new(12, 12);
        map.set_tile(GridPos::new(0, 0), TileKind::Wall);
        map.set_tile(GridPos::new(5, 0), TileKind::Wall);
        assert!(has_line_of_sight(
            GridPos::new(0, 0),
            GridPos::new(5, 0),
            &map
        ));
    }

    #[test]
    fn test_diagonal_blocked() {
        let mut map = GameMap::new(12, 12);
        map.set_tile(GridPos::new(2, 2), TileKind::Wall);
        assert!(!has_line_of_sight(
            GridPos::new(0, 0),
            GridPos::new(4, 4),
            &map
        ));
    }

    #[test]
    fn test_adjacent_always_clear() {
        let mut map = GameMap::new(12, 12);
        map.set_tile(GridPos::new(6, 5), TileKind::Wall);
        // No intermediate cell between adjacent tiles
        assert!(has_line_of_sight(
            GridPos::new(5, 5),
            GridPos::new(6, 5),
            &map
        ));
    }

    #[test]
    fn test_symmetric_on_straight_paths() {
        let mut map = GameMap::new(12, 12);
        map.set_tile(GridPos::new(4, 7), TileKind::Wall);
        let a = GridPos::new(4, 2);
        let b = GridPos::new(4, 10);
        assert_eq!(
            has_line_of_sight(a, b, &map),
            has_line_of_sight(b, a, &map)
        );
    }

    #[test]
    fn test_zero_length_line() {
        let map = GameMap::new(12, 12);
        let p = GridPos::new(3, 3);
        assert!(has_line_of_sight(p, p, &map));
    }
}
