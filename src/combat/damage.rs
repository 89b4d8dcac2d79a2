//! The damage formula: zone, shield, and elevation

use serde::{Deserialize, Serialize};

use crate::combat::zone::{classify_zone, AttackZone};
use crate::constants::{ELEVATION_DAMAGE_BONUS, SHIELD_MULTIPLIER};
use crate::core::types::{Facing, GridPos};
use crate::units::{Archetype, Unit};

/// Outcome of the damage formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    pub damage: i32,
    pub zone: AttackZone,
    pub shield_applied: bool,
}

/// Compute damage for one attack
///
/// `floor(atk x zone x shield) + elevation`. The Knight's shield only
/// blunts frontal hits and folds in before the flat elevation bonus.
pub fn calculate_damage(
    attacker: &Unit,
    defender: &Unit,
    attacker_on_high_ground: bool,
) -> DamageReport {
    damage_against(
        attacker,
        defender.archetype,
        defender.pos,
        defender.facing,
        attacker_on_high_ground,
    )
}

/// The formula against a hypothetical defender placement
///
/// Overwatch resolves against the mover's destination and post-move facing
/// before either is committed, so the defender is passed piecewise.
pub fn damage_against(
    attacker: &Unit,
    defender_archetype: Archetype,
    defender_pos: GridPos,
    defender_facing: Facing,
    attacker_on_high_ground: bool,
) -> DamageReport {
    let zone = classify_zone(attacker.pos, defender_pos, defender_facing);

    let mut shield = 1.0;
    let mut shield_applied = false;
    if defender_archetype == Archetype::Knight && zone == AttackZone::Front {
        shield = SHIELD_MULTIPLIER;
        shield_applied = true;
    }

    let elevation = if attacker_on_high_ground {
        ELEVATION_DAMAGE_BONUS
    } else {
        0
    };

    let damage = (attacker.attack as f64 * zone.multiplier() * shield).floor() as i32 + elevation;

    DamageReport {
        damage,
        zone,
        shield_applied,
    }
}
