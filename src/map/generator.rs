//! Procedural board generation via cellular automaton
//!
//! No connectivity guarantee beyond clear spawn rows: a board bisected by
//! walls is a legal battlefield.

use rand::Rng;

use crate::constants::{
    AUTOMATON_ITERATIONS, HIGHGROUND_CHANCE, SPAWN_ROWS, WALL_BIRTH_NEIGHBORS, WALL_SEED_CHANCE,
    WALL_SURVIVE_NEIGHBORS,
};
use crate::core::types::GridPos;
use crate::map::grid::GameMap;
use crate::map::tile::TileKind;

/// Generate a board
///
/// Seeds walls at random, smooths them with a cellular automaton, clears
/// the spawn rows along both short edges, then scatters high ground over
/// the remaining floor.
pub fn generate_map(rng: &mut impl Rng, width: i32, height: i32) -> GameMap {
    let mut walls: Vec<bool> = (0..width * height)
        .map(|_| rng.gen_bool(WALL_SEED_CHANCE))
        .collect();

    for _ in 0..AUTOMATON_ITERATIONS {
        walls = smooth(&walls, width, height);
    }

    let mut map = GameMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if walls[(y * width + x) as usize] {
                map.set_tile(GridPos::new(x, y), TileKind::Wall);
            }
        }
    }

    // Spawn safety: both short edges stay open
    for y in (0..SPAWN_ROWS).chain(height - SPAWN_ROWS..height) {
        for x in 0..width {
            map.set_tile(GridPos::new(x, y), TileKind::Floor);
        }
    }

    for y in SPAWN_ROWS..height - SPAWN_ROWS {
        for x in 0..width {
            let pos = GridPos::new(x, y);
            if map.tile(pos) == Some(TileKind::Floor) && rng.gen_bool(HIGHGROUND_CHANCE) {
                map.set_tile(pos, TileKind::HighGround);
            }
        }
    }

    map
}

/// One automaton iteration: walls survive with enough wall neighbors,
/// floors are walled in when crowded
fn smooth(walls: &[bool], width: i32, height: i32) -> Vec<bool> {
    let mut next = vec![false; walls.len()];
    for y in 0..height {
        for x in 0..width {
            let n = wall_neighbors(walls, width, height, x, y);
            let idx = (y * width + x) as usize;
            next[idx] = if walls[idx] {
                n >= WALL_SURVIVE_NEIGHBORS
            } else {
                n >= WALL_BIRTH_NEIGHBORS
            };
        }
    }
    next
}

/// Count wall neighbors of a cell; off-board counts as wall so edges stay
/// mostly closed
fn wall_neighbors(walls: &[bool], width: i32, height: i32, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= width || ny >= height {
                count += 1;
            } else if walls[(ny * width + nx) as usize] {
                count += 1;
            }
        }
    }
    count
}
