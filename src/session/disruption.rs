//! Per-turn disruption events
//!
//! From turn three onward every turn-advance may activate one global
//! effect; the tag expires at the next advance.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{PANIC_CHANCE, PANIC_FIRST_TURN};
use crate::core::types::Facing;
use crate::map::GameMap;
use crate::units::Unit;

/// Global event rolled at turn start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disruption {
    /// Incoming units boot one AP short
    Throttle,
    /// Interference with no mechanical effect beyond the tag
    Glitch,
    /// Every unit on the board is shoved one random step
    Reboot,
}

/// Roll the disruption for a new turn, if any
pub fn roll_disruption(turn: u32, rng: &mut impl Rng) -> Option<Disruption> {
    if turn < PANIC_FIRST_TURN {
        return None;
    }
    if !rng.gen_bool(PANIC_CHANCE) {
        return None;
    }
    Some(match rng.gen_range(0..3) {
        0 => Disruption::Throttle,
        1 => Disruption::Glitch,
        _ => Disruption::Reboot,
    })
}

/// Shove every unit one step in a uniformly random cardinal direction
///
/// Clamped to the board; displaced units may stack, and nothing untangles
/// them afterwards.
pub fn apply_reboot(units: &mut [Unit], map: &GameMap, rng: &mut impl Rng) {
    for unit in units.iter_mut() {
        let dir = Facing::all()[rng.gen_range(0..4)];
        unit.pos = map.clamp(unit.pos.step(dir));
    }
}
