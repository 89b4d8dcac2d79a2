//! Session orchestrator: routes player actions to the resolvers
//!
//! Validate, delegate, report. A rejected action never mutates the
//! snapshot.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::{calculate_damage, scanned_hostiles, AttackZone};
use crate::constants::{HEAL_AMOUNT, SCAN_RADIUS};
use crate::core::error::{Rejection, Result};
use crate::core::types::{Facing, GridPos, Timestamp, UnitId};
use crate::geometry::{facing_toward, has_line_of_sight, is_in_range, scan_block};
use crate::movement::check_move;
use crate::session::ending::{accept_draw, forfeit, offer_draw};
use crate::session::overwatch::{resolve_overwatch, set_overwatch};
use crate::session::state::{Outcome, Session};
use crate::session::sudo::{sudo_attack, sudo_move, sudo_scan};
use crate::session::turns::end_turn;
use crate::session::visibility::reveal_unit_view;
use crate::spatial::UnitGrid;
use crate::units::Archetype;

/// A player action submitted through the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlayerAction {
    Move { unit: UnitId, to: GridPos },
    Attack { attacker: UnitId, target: UnitId },
    Heal { healer: UnitId, target: UnitId },
    Scan { at: GridPos },
    Overwatch { unit: UnitId, direction: Facing },
    SudoMove { unit: UnitId, to: GridPos },
    SudoScan,
    SudoAttack { attacker: UnitId, target: UnitId },
    EndTurn,
    Forfeit,
    OfferDraw,
    AcceptDraw,
}

/// Result payload of a resolved action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ActionReport {
    Moved {
        overwatch_triggered: bool,
        damage_taken: i32,
        destroyed: bool,
    },
    Attacked {
        damage: i32,
        zone: AttackZone,
        shield_applied: bool,
        destroyed: bool,
    },
    Healed {
        restored: i32,
    },
    Scanned {
        hostiles: usize,
    },
    OverwatchSet,
    SudoMoved,
    SudoScanned,
    SudoAttacked {
        damage: i32,
        destroyed: bool,
    },
    TurnEnded,
    Forfeited,
    DrawOffered,
    DrawAccepted,
}

/// Apply one action to a session snapshot
pub fn apply(
    session: &mut Session,
    player: &str,
    action: PlayerAction,
    rng: &mut impl Rng,
    now: Timestamp,
) -> Result<ActionReport> {
    debug!(?action, player, "applying action");
    match action {
        PlayerAction::Move { unit, to } => resolve_move(session, player, unit, to, now),
        PlayerAction::Attack { attacker, target } => {
            resolve_attack(session, player, attacker, target, now)
        }
        PlayerAction::Heal { healer, target } => resolve_heal(session, player, healer, target, now),
        PlayerAction::Scan { at } => resolve_scan(session, player, at, now),
        PlayerAction::Overwatch { unit, direction } => {
            set_overwatch(session, player, unit, direction, now)?;
            Ok(ActionReport::OverwatchSet)
        }
        PlayerAction::SudoMove { unit, to } => {
            sudo_move(session, player, unit, to, now)?;
            Ok(ActionReport::SudoMoved)
        }
        PlayerAction::SudoScan => {
            sudo_scan(session, player, now)?;
            Ok(ActionReport::SudoScanned)
        }
        PlayerAction::SudoAttack { attacker, target } => {
            let (damage, destroyed) = sudo_attack(session, player, attacker, target, now)?;
            Ok(ActionReport::SudoAttacked { damage, destroyed })
        }
        PlayerAction::EndTurn => {
            end_turn(session, player, rng, now)?;
            Ok(ActionReport::TurnEnded)
        }
        PlayerAction::Forfeit => {
            forfeit(session, player, now)?;
            Ok(ActionReport::Forfeited)
        }
        PlayerAction::OfferDraw => {
            offer_draw(session, player, now)?;
            Ok(ActionReport::DrawOffered)
        }
        PlayerAction::AcceptDraw => {
            accept_draw(session, player, now)?;
            Ok(ActionReport::DrawAccepted)
        }
    }
}

/// Resolve a move order: legality, overwatch interrupts, placement, fog
pub fn resolve_move(
    session: &mut Session,
    player: &str,
    unit_id: UnitId,
    to: GridPos,
    now: Timestamp,
) -> Result<ActionReport> {
    let role = session.role_of(player)?;
    let mut ended = None;

    let report = {
        let battle = session.battle_mut()?;
        if battle.active_player != role {
            return Err(Rejection::NotYourTurn);
        }

        let (archetype, ap, from, old_facing, vision) = {
            let unit = battle.unit(unit_id)?;
            if unit.owner != role {
                return Err(Rejection::NotYourUnit);
            }
            (unit.archetype, unit.ap, unit.pos, unit.facing, unit.vision)
        };

        let grid = UnitGrid::build(&battle.units);
        let cost = check_move(&battle.map, &battle.units, &grid, unit_id, to, ap)?;
        let facing = facing_toward(from, to).unwrap_or(old_facing);

        // Reactive fire lands before the mover is placed
        let (damage_taken, overwatch_triggered) =
            resolve_overwatch(battle, role, archetype, to, facing);

        let adjacent_enemy = battle
            .units
            .iter()
            .any(|e| e.owner != role && e.pos.manhattan(&to) <= 1);

        let unit = battle.unit_mut(unit_id)?;
        let hp = (unit.hp - damage_taken).max(0);

        if hp == 0 {
            // Shot down in transit: removed, never placed
            battle.remove_unit(unit_id);
            if !battle.has_units(role) {
                ended = Some(Outcome::Winner(role.opponent()));
            }
            ActionReport::Moved {
                overwatch_triggered,
                damage_taken,
                destroyed: true,
            }
        } else {
            unit.hp = hp;
            unit.pos = to;
            unit.ap -= cost;
            unit.facing = facing;
            if unit.archetype == Archetype::Scout {
                unit.stealthed = !adjacent_enemy;
            }
            reveal_unit_view(battle, role, to, vision);
            ActionReport::Moved {
                overwatch_triggered,
                damage_taken,
                destroyed: false,
            }
        }
    };

    if let Some(outcome) = ended {
        session.finish(outcome);
    }
    session.last_action_at = now;
    Ok(report)
}

/// Resolve an attack order
pub fn resolve_attack(
    session: &mut Session,
    player: &str,
    attacker_id: UnitId,
    target_id: UnitId,
    now: Timestamp,
) -> Result<ActionReport> {
    let role = session.role_of(player)?;
    let mut ended = None;

    let report = {
        let battle = session.battle_mut()?;
        if battle.active_player != role {
            return Err(Rejection::NotYourTurn);
        }

        let attacker = battle.unit(attacker_id)?;
        let target = battle.unit(target_id)?;
        if attacker.owner != role {
            return Err(Rejection::NotYourUnit);
        }
        if target.owner == role {
            return Err(Rejection::CannotAttackAlly);
        }
        if attacker.ap < 1 {
            return Err(Rejection::InsufficientAp);
        }

        let on_high_ground = battle.map.is_high_ground(attacker.pos);
        if !is_in_range(attacker.pos, target.pos, attacker.range, on_high_ground) {
            return Err(Rejection::OutOfRange);
        }
        if !has_line_of_sight(attacker.pos, target.pos, &battle.map) {
            return Err(Rejection::BlockedByWall);
        }

        let damage = calculate_damage(attacker, target, on_high_ground);
        let facing = facing_toward(attacker.pos, target.pos).unwrap_or(attacker.facing);
        let target_owner = target.owner;
        let new_hp = (target.hp - damage.damage).max(0);

        {
            let attacker = battle.unit_mut(attacker_id)?;
            attacker.ap -= 1;
            attacker.facing = facing;
            attacker.stealthed = false;
        }

        if new_hp == 0 {
            battle.remove_unit(target_id);
            if !battle.has_units(target_owner) {
                ended = Some(Outcome::Winner(role));
            }
        } else {
            let target = battle.unit_mut(target_id)?;
            target.hp = new_hp;
            // A hit interrupts the defender's overwatch
            target.clear_overwatch();
        }

        ActionReport::Attacked {
            damage: damage.damage,
            zone: damage.zone,
            shield_applied: damage.shield_applied,
            destroyed: new_hp == 0,
        }
    };

    if let Some(outcome) = ended {
        session.finish(outcome);
    }
    session.last_action_at = now;
    Ok(report)
}

/// Resolve a heal order
pub fn resolve_heal(
    session: &mut Session,
    player: &str,
    healer_id: UnitId,
    target_id: UnitId,
    now: Timestamp,
) -> Result<ActionReport> {
    let role = session.role_of(player)?;
    let battle = session.battle_mut()?;
    if battle.active_player != role {
        return Err(Rejection::NotYourTurn);
    }

    let healer = battle.unit(healer_id)?;
    let target = battle.unit(target_id)?;

    if healer.archetype != Archetype::Medic {
        return Err(Rejection::NotAMedic);
    }
    if target.owner != role {
        return Err(Rejection::CannotHealEnemy);
    }
    if healer_id == target_id {
        return Err(Rejection::CannotSelfHeal);
    }
    if healer.pos.manhattan(&target.pos) != 1 {
        return Err(Rejection::NotAdjacent);
    }
    if target.hp >= target.max_hp {
        return Err(Rejection::AlreadyFullHp);
    }
    if healer.ap < 1 {
        return Err(Rejection::InsufficientAp);
    }

    let restored = (target.max_hp - target.hp).min(HEAL_AMOUNT);
    battle.unit_mut(target_id)?.hp += restored;
    battle.unit_mut(healer_id)?.ap -= 1;

    session.last_action_at = now;
    Ok(ActionReport::Healed { restored })
}

/// Resolve a scan order
///
/// Any owned unit with AP pays for the pulse; the first such unit in list
/// order is charged. The 3x3 block is revealed without line of sight, and
/// hostiles inside it are counted with Scouts excluded.
pub fn resolve_scan(
    session: &mut Session,
    player: &str,
    at: GridPos,
    now: Timestamp,
) -> Result<ActionReport> {
    let role = session.role_of(player)?;
    let battle = session.battle_mut()?;
    if battle.active_player != role {
        return Err(Rejection::NotYourTurn);
    }

    let payer = battle
        .units
        .iter()
        .position(|u| u.owner == role && u.ap >= 1)
        .ok_or(Rejection::InsufficientAp)?;

    let block = scan_block(at, &battle.map);
    battle.reveal(role, block);
    battle.units[payer].ap -= 1;

    let hostiles = scanned_hostiles(&battle.units, role)
        .into_iter()
        .filter(|u| u.pos.chebyshev(&at) <= SCAN_RADIUS as u32)
        .count();

    session.last_action_at = now;
    Ok(ActionReport::Scanned { hostiles })
}
