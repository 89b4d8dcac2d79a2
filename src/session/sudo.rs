//! Override-resource actions that bypass normal rules
//!
//! Gated purely by scarcity: one RAP each, usable only on the acting
//! player's turn.

use tracing::debug;

use crate::constants::SUDO_ATTACK_MULTIPLIER;
use crate::core::error::{Rejection, Result};
use crate::core::types::{GridPos, PlayerRole, Timestamp, UnitId};
use crate::session::state::{Outcome, Session};

fn require_rap(session: &mut Session, player: &str) -> Result<PlayerRole> {
    let role = session.role_of(player)?;
    let battle = session.battle_mut()?;
    if battle.active_player != role {
        return Err(Rejection::NotYourTurn);
    }
    if *battle.rap.get(role) < 1 {
        return Err(Rejection::InsufficientRap);
    }
    Ok(role)
}

/// Unrestricted relocation: ignores walls, collision, and AP
///
/// The destination must still be on the board, and the jump always drops
/// a Scout's cloak.
pub fn sudo_move(
    session: &mut Session,
    player: &str,
    unit_id: UnitId,
    to: GridPos,
    now: Timestamp,
) -> Result<()> {
    let role = require_rap(session, player)?;
    let battle = session.battle_mut()?;

    if !battle.map.in_bounds(to) {
        return Err(Rejection::OutOfBounds);
    }
    {
        let unit = battle.unit_mut(unit_id)?;
        if unit.owner != role {
            return Err(Rejection::NotYourUnit);
        }
        unit.pos = to;
        unit.stealthed = false;
    }

    *battle.rap.get_mut(role) -= 1;
    debug!(?role, "sudo move");
    session.last_action_at = now;
    Ok(())
}

/// Full-map reveal: ignores line of sight and scan radius
pub fn sudo_scan(session: &mut Session, player: &str, now: Timestamp) -> Result<()> {
    let role = require_rap(session, player)?;
    let battle = session.battle_mut()?;

    let all = battle.map.all_positions();
    battle.reveal(role, all);
    *battle.rap.get_mut(role) -= 1;
    debug!(?role, "sudo scan");
    session.last_action_at = now;
    Ok(())
}

/// Overcharged attack: ignores range, line of sight, and shields
///
/// Deals double the attacker's base attack. Returns the damage dealt and
/// whether the target was destroyed.
pub fn sudo_attack(
    session: &mut Session,
    player: &str,
    attacker_id: UnitId,
    target_id: UnitId,
    now: Timestamp,
) -> Result<(i32, bool)> {
    let role = require_rap(session, player)?;

    let mut ended = None;
    let (damage, destroyed) = {
        let battle = session.battle_mut()?;

        let attacker = battle.unit(attacker_id)?;
        let target = battle.unit(target_id)?;
        if attacker.owner != role {
            return Err(Rejection::NotYourUnit);
        }
        if target.owner == role {
            return Err(Rejection::CannotAttackAlly);
        }

        let damage = attacker.attack * SUDO_ATTACK_MULTIPLIER;
        let target_owner = target.owner;
        let new_hp = (target.hp - damage).max(0);

        if new_hp == 0 {
            battle.remove_unit(target_id);
            if !battle.has_units(target_owner) {
                ended = Some(Outcome::Winner(role));
            }
        } else {
            battle.unit_mut(target_id)?.hp = new_hp;
        }

        *battle.rap.get_mut(role) -= 1;
        (damage, new_hp == 0)
    };

    if let Some(outcome) = ended {
        session.finish(outcome);
    }
    debug!(?role, damage, destroyed, "sudo attack");
    session.last_action_at = now;
    Ok((damage, destroyed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RulesConfig;
    use crate::core::types::PlayerRole;
    use crate::session::draft::submit_squad;
    use crate::session::lobby::{create_lobby, join_lobby};
    use crate::session::state::Phase;
    use crate::units::Archetype;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn playing_session_with_rap(rng: &mut ChaCha8Rng) -> Session {
        let cfg = RulesConfig::default();
        let mut session = create_lobby(rng, "alice", true, 0);
        join_lobby(&mut session, "bob", 0).unwrap();
        submit_squad(&mut session, &cfg, "alice", &[Archetype::Knight], rng, 0).unwrap();
        submit_squad(&mut session, &cfg, "bob", &[Archetype::Archer, Archetype::Archer], rng, 0)
            .unwrap();
        let battle = session.battle_mut().unwrap();
        battle.rap.p1 = 2;
        battle.rap.p2 = 2;
        session
    }

    fn unit_of(session: &Session, role: PlayerRole) -> UnitId {
        session
            .battle()
            .unwrap()
            .units
            .iter()
            .find(|u| u.owner == role)
            .unwrap()
            .id
    }

    #[test]
    fn test_sudo_move_ignores_walls_and_ap() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut session = playing_session_with_rap(&mut rng);
        let knight = unit_of(&session, PlayerRole::P1);

        {
            let battle = session.battle_mut().unwrap();
            battle.units[0].ap = 0;
            battle
                .map
                .set_tile(GridPos::new(6, 6), crate::map::TileKind::Wall);
        }

        sudo_move(&mut session, "alice", knight, GridPos::new(6, 6), 100).unwrap();
        let battle = session.battle().unwrap();
        assert_eq!(battle.unit(knight).unwrap().pos, GridPos::new(6, 6));
        assert_eq!(battle.rap.p1, 1);
    }

    #[test]
    fn test_sudo_move_still_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut session = playing_session_with_rap(&mut rng);
        let knight = unit_of(&session, PlayerRole::P1);

        assert_eq!(
            sudo_move(&mut session, "alice", knight, GridPos::new(20, 3), 100),
            Err(Rejection::OutOfBounds)
        );
        // Nothing spent on rejection
        assert_eq!(session.battle().unwrap().rap.p1, 2);
    }

    #[test]
    fn test_sudo_requires_rap() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut session = playing_session_with_rap(&mut rng);
        session.battle_mut().unwrap().rap.p1 = 0;
        let knight = unit_of(&session, PlayerRole::P1);

        assert_eq!(
            sudo_move(&mut session, "alice", knight, GridPos::new(5, 5), 100),
            Err(Rejection::InsufficientRap)
        );
    }

    #[test]
    fn test_sudo_requires_own_turn() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut session = playing_session_with_rap(&mut rng);
        assert_eq!(
            sudo_scan(&mut session, "bob", 100),
            Err(Rejection::NotYourTurn)
        );
    }

    #[test]
    fn test_sudo_scan_reveals_whole_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut session = playing_session_with_rap(&mut rng);

        sudo_scan(&mut session, "alice", 100).unwrap();
        let battle = session.battle().unwrap();
        assert_eq!(battle.revealed.get(PlayerRole::P1).len(), 144);
        assert!(battle.revealed.get(PlayerRole::P2).is_empty());
        assert_eq!(battle.rap.p1, 1);
    }

    #[test]
    fn test_sudo_attack_double_damage_no_shield() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut session = playing_session_with_rap(&mut rng);
        let knight = unit_of(&session, PlayerRole::P1);
        let archer = unit_of(&session, PlayerRole::P2);

        let (damage, destroyed) =
            sudo_attack(&mut session, "alice", knight, archer, 100).unwrap();
        // Knight atk 30, doubled, against a 60 hp archer
        assert_eq!(damage, 60);
        assert!(destroyed);
        // The second archer keeps the game alive
        assert!(matches!(session.phase, Phase::Playing(_)));
    }

    #[test]
    fn test_sudo_attack_win_on_last_unit() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let cfg = RulesConfig::default();
        let mut session = create_lobby(&mut rng, "alice", true, 0);
        join_lobby(&mut session, "bob", 0).unwrap();
        submit_squad(&mut session, &cfg, "alice", &[Archetype::Knight], &mut rng, 0).unwrap();
        submit_squad(&mut session, &cfg, "bob", &[Archetype::Scout], &mut rng, 0).unwrap();
        session.battle_mut().unwrap().rap.p1 = 1;

        let knight = unit_of(&session, PlayerRole::P1);
        let scout = unit_of(&session, PlayerRole::P2);

        let (damage, destroyed) = sudo_attack(&mut session, "alice", knight, scout, 100).unwrap();
        assert_eq!(damage, 60);
        assert!(destroyed);
        assert!(matches!(
            session.phase,
            Phase::Finished {
                outcome: Outcome::Winner(PlayerRole::P1)
            }
        ));
    }

    #[test]
    fn test_sudo_attack_cannot_hit_ally() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let cfg = RulesConfig::default();
        let mut session = create_lobby(&mut rng, "alice", true, 0);
        join_lobby(&mut session, "bob", 0).unwrap();
        submit_squad(
            &mut session,
            &cfg,
            "alice",
            &[Archetype::Knight, Archetype::Archer],
            &mut rng,
            0,
        )
        .unwrap();
        submit_squad(&mut session, &cfg, "bob", &[Archetype::Scout], &mut rng, 0).unwrap();
        session.battle_mut().unwrap().rap.p1 = 1;

        let battle = session.battle().unwrap();
        let knight = battle.units[0].id;
        let archer = battle.units[1].id;

        assert_eq!(
            sudo_attack(&mut session, "alice", knight, archer, 100),
            Err(Rejection::CannotAttackAlly)
        );
    }
}
