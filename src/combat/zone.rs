//! Attack-origin zones relative to defender facing

use serde::{Deserialize, Serialize};

use crate::constants::{FLANK_MULTIPLIER, FRONT_MULTIPLIER, REAR_MULTIPLIER};
use crate::core::types::{Facing, GridPos};

/// Where an attack lands relative to the defender's facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackZone {
    Front,
    Flank,
    Rear,
}

impl AttackZone {
    /// Damage multiplier for the zone
    pub fn multiplier(&self) -> f64 {
        match self {
            AttackZone::Front => FRONT_MULTIPLIER,
            AttackZone::Flank => FLANK_MULTIPLIER,
            AttackZone::Rear => REAR_MULTIPLIER,
        }
    }
}

/// Classify the attack origin
///
/// Only the facing axis matters: a zero delta on that axis is a flank
/// whatever the cross-axis offset.
pub fn classify_zone(attacker: GridPos, defender: GridPos, defender_facing: Facing) -> AttackZone {
    let dx = attacker.x - defender.x;
    let dy = attacker.y - defender.y;

    match defender_facing {
        Facing::North => match dy.signum() {
            -1 => AttackZone::Front,
            1 => AttackZone::Rear,
            _ => AttackZone::Flank,
        },
        Facing::South => match dy.signum() {
            1 => AttackZone::Front,
            -1 => AttackZone::Rear,
            _ => AttackZone::Flank,
        },
        Facing::East => match dx.signum() {
            1 => AttackZone::Front,
            -1 => AttackZone::Rear,
            _ => AttackZone::Flank,
        },
        Facing::West => match dx.signum() {
            -1 => AttackZone::Front,
            1 => AttackZone::Rear,
            _ => AttackZone::Flank,
        },
    }
}
