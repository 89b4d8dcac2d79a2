//! Overwatch posting and reactive fire

use crate::combat::damage_against;
use crate::core::error::{Rejection, Result};
use crate::core::types::{Facing, GridPos, PlayerRole, Timestamp, UnitId};
use crate::geometry::{has_line_of_sight, is_in_range};
use crate::session::state::{BattleState, Session};
use crate::units::Archetype;

/// Post overwatch on a watched direction
///
/// Costs one AP, turns the unit to face the watch, and is off-limits to
/// Medics. The watch clears at the holder's next turn start, when it
/// fires, or when the holder survives a hit.
pub fn set_overwatch(
    session: &mut Session,
    player: &str,
    unit_id: UnitId,
    direction: Facing,
    now: Timestamp,
) -> Result<()> {
    let role = session.role_of(player)?;
    let battle = session.battle_mut()?;
    if battle.active_player != role {
        return Err(Rejection::NotYourTurn);
    }

    let unit = battle.unit_mut(unit_id)?;
    if unit.owner != role {
        return Err(Rejection::NotYourUnit);
    }
    if unit.archetype == Archetype::Medic {
        return Err(Rejection::CannotOverwatch);
    }
    if unit.ap < 1 {
        return Err(Rejection::InsufficientAp);
    }

    unit.overwatch = Some(direction);
    unit.facing = direction;
    unit.ap -= 1;
    session.last_action_at = now;
    Ok(())
}

/// Sum reactive fire against a move destination, clearing spent watchers
///
/// Direction gating is a strict single-axis sign test: a watcher looking
/// north only reacts to destinations strictly north of it, whatever the
/// east-west offset. Damage resolves against the mover's post-move facing
/// before the mover is placed.
pub fn resolve_overwatch(
    battle: &mut BattleState,
    mover_owner: PlayerRole,
    mover_archetype: Archetype,
    dest: GridPos,
    dest_facing: Facing,
) -> (i32, bool) {
    let mut total = 0;
    let mut triggered = false;

    for i in 0..battle.units.len() {
        let shot = {
            let watcher = &battle.units[i];
            if watcher.owner == mover_owner {
                None
            } else if let Some(watch) = watcher.overwatch {
                let on_high_ground = battle.map.is_high_ground(watcher.pos);
                let dx = dest.x - watcher.pos.x;
                let dy = dest.y - watcher.pos.y;
                let in_direction = match watch {
                    Facing::North => dy < 0,
                    Facing::South => dy > 0,
                    Facing::East => dx > 0,
                    Facing::West => dx < 0,
                };

                if in_direction
                    && is_in_range(watcher.pos, dest, watcher.range, on_high_ground)
                    && has_line_of_sight(watcher.pos, dest, &battle.map)
                {
                    Some(
                        damage_against(watcher, mover_archetype, dest, dest_facing, on_high_ground)
                            .damage,
                    )
                } else {
                    None
                }
            } else {
                None
            }
        };

        if let Some(damage) = shot {
            total += damage;
            triggered = true;
            battle.units[i].clear_overwatch();
        }
    }

    (total, triggered)
}
