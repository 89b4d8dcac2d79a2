//! Turn advancement, resource drip, and timeout sweeps

use rand::Rng;
use tracing::debug;

use crate::constants::{RAP_CAP, RAP_GAIN_INTERVAL};
use crate::core::config::RulesConfig;
use crate::core::error::{Rejection, Result};
use crate::core::types::{PlayerRole, Timestamp};
use crate::session::disruption::{apply_reboot, roll_disruption, Disruption};
use crate::session::state::{Outcome, Phase, Session};
use crate::units::Archetype;

/// Advance to the next player's turn
///
/// Shared by end-turn and the turn-timeout sweep: flips the seat, expires
/// the previous disruption and rolls a fresh one, restores the incoming
/// side's AP, drops their overwatch, re-cloaks their Scouts, and drips the
/// override resource every third turn.
pub fn advance_turn(session: &mut Session, rng: &mut impl Rng, now: Timestamp) -> Result<()> {
    let battle = session.battle_mut()?;

    let incoming = battle.active_player.opponent();
    battle.active_player = incoming;
    battle.turn += 1;
    battle.turn_started_at = now;

    battle.disruption = roll_disruption(battle.turn, rng);
    if battle.disruption == Some(Disruption::Reboot) {
        apply_reboot(&mut battle.units, &battle.map, rng);
    }

    let throttled = battle.disruption == Some(Disruption::Throttle);
    for unit in battle.units.iter_mut().filter(|u| u.owner == incoming) {
        unit.ap = if throttled {
            unit.max_ap.saturating_sub(1)
        } else {
            unit.max_ap
        };
        unit.clear_overwatch();
        if unit.archetype == Archetype::Scout && !unit.stealthed {
            unit.stealthed = true;
        }
    }

    if battle.turn % RAP_GAIN_INTERVAL == 0 {
        battle.rap.p1 = (battle.rap.p1 + 1).min(RAP_CAP);
        battle.rap.p2 = (battle.rap.p2 + 1).min(RAP_CAP);
    }

    debug!(turn = battle.turn, ?incoming, disruption = ?battle.disruption, "turn advanced");
    session.last_action_at = now;
    Ok(())
}

/// Player-initiated end of turn
pub fn end_turn(session: &mut Session, player: &str, rng: &mut impl Rng, now: Timestamp) -> Result<()> {
    let role = session.role_of(player)?;
    let battle = session.battle()?;
    if battle.active_player != role {
        return Err(Rejection::NotYourTurn);
    }
    advance_turn(session, rng, now)
}

/// Advisory draft-timeout sweep
///
/// Acts only when a poll arrives after the deadline: the side that never
/// submitted forfeits; if neither did, the session ends drawn. Returns
/// whether the sweep fired.
pub fn check_draft_timeout(session: &mut Session, cfg: &RulesConfig, now: Timestamp) -> bool {
    let draft = match &session.phase {
        Phase::Drafting(draft) => draft,
        _ => return false,
    };
    if now.saturating_sub(draft.started_at) <= cfg.draft_timeout_ms {
        return false;
    }

    let outcome = match (draft.p1_squad.is_some(), draft.p2_squad.is_some()) {
        (false, false) => Outcome::Draw,
        (true, false) => Outcome::Winner(PlayerRole::P1),
        (false, true) => Outcome::Winner(PlayerRole::P2),
        // Both ready would already have started the battle
        (true, true) => return false,
    };
    session.finish(outcome);
    session.last_action_at = now;
    true
}

/// Advisory turn-timeout sweep
///
/// An overrun turn auto-ends exactly like a normal end-turn, disruption
/// roll included. Returns whether the sweep fired.
pub fn check_turn_timeout(
    session: &mut Session,
    cfg: &RulesConfig,
    rng: &mut impl Rng,
    now: Timestamp,
) -> Result<bool> {
    let battle = match &session.phase {
        Phase::Playing(battle) => battle,
        _ => return Ok(false),
    };
    if now.saturating_sub(battle.turn_started_at) <= cfg.turn_timeout_ms {
        return Ok(false);
    }

    advance_turn(session, rng, now)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RulesConfig;
    use crate::core::types::PlayerRole;
    use crate::session::draft::submit_squad;
    use crate::session::lobby::{create_lobby, join_lobby};
    use crate::session::state::Session;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn playing_session(rng: &mut ChaCha8Rng) -> Session {
        let cfg = RulesConfig::default();
        let mut session = create_lobby(rng, "alice", true, 0);
        join_lobby(&mut session, "bob", 0).unwrap();
        submit_squad(&mut session, &cfg, "alice", &[Archetype::Knight, Archetype::Scout], rng, 0)
            .unwrap();
        submit_squad(&mut session, &cfg, "bob", &[Archetype::Archer], rng, 0).unwrap();
        session
    }

    #[test]
    fn test_advance_flips_seat_and_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        advance_turn(&mut session, &mut rng, 500).unwrap();
        let battle = session.battle().unwrap();
        assert_eq!(battle.turn, 2);
        assert_eq!(battle.active_player, PlayerRole::P2);
        assert_eq!(battle.turn_started_at, 500);
    }

    #[test]
    fn test_incoming_units_restored() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        // Drain p2's archer and post overwatch before its turn starts
        {
            let battle = session.battle_mut().unwrap();
            let archer = battle
                .units
                .iter_mut()
                .find(|u| u.owner == PlayerRole::P2)
                .unwrap();
            archer.ap = 0;
            archer.overwatch = Some(crate::core::types::Facing::South);
        }

        advance_turn(&mut session, &mut rng, 500).unwrap();

        let battle = session.battle().unwrap();
        let archer = battle.units.iter().find(|u| u.owner == PlayerRole::P2).unwrap();
        let throttled = battle.disruption == Some(Disruption::Throttle);
        assert_eq!(archer.ap, if throttled { archer.max_ap - 1 } else { archer.max_ap });
        assert!(!archer.is_overwatching());
    }

    #[test]
    fn test_scout_recloaks_on_own_turn_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        {
            let battle = session.battle_mut().unwrap();
            let scout = battle
                .units
                .iter_mut()
                .find(|u| u.archetype == Archetype::Scout)
                .unwrap();
            scout.stealthed = false;
        }

        // P1's scout re-cloaks when control returns to P1
        advance_turn(&mut session, &mut rng, 100).unwrap();
        advance_turn(&mut session, &mut rng, 200).unwrap();

        let battle = session.battle().unwrap();
        let scout = battle
            .units
            .iter()
            .find(|u| u.archetype == Archetype::Scout)
            .unwrap();
        assert!(scout.stealthed);
    }

    #[test]
    fn test_rap_drips_every_third_turn() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        advance_turn(&mut session, &mut rng, 0).unwrap(); // turn 2
        assert_eq!(session.battle().unwrap().rap.p1, 0);
        advance_turn(&mut session, &mut rng, 0).unwrap(); // turn 3
        let battle = session.battle().unwrap();
        assert_eq!(battle.rap.p1, 1);
        assert_eq!(battle.rap.p2, 1);
    }

    #[test]
    fn test_rap_caps_at_three() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        for _ in 0..20 {
            advance_turn(&mut session, &mut rng, 0).unwrap();
        }
        let battle = session.battle().unwrap();
        assert_eq!(battle.rap.p1, 3);
        assert_eq!(battle.rap.p2, 3);
    }

    #[test]
    fn test_end_turn_requires_active_seat() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        assert_eq!(
            end_turn(&mut session, "bob", &mut rng, 100),
            Err(Rejection::NotYourTurn)
        );
        end_turn(&mut session, "alice", &mut rng, 100).unwrap();
        assert_eq!(session.battle().unwrap().active_player, PlayerRole::P2);
    }

    #[test]
    fn test_draft_timeout_forfeits_missing_side() {
        let cfg = RulesConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = create_lobby(&mut rng, "alice", true, 0);
        join_lobby(&mut session, "bob", 0).unwrap();
        submit_squad(&mut session, &cfg, "alice", &[Archetype::Scout], &mut rng, 10).unwrap();

        assert!(!check_draft_timeout(&mut session, &cfg, 95_000));
        assert!(check_draft_timeout(&mut session, &cfg, 95_001));
        assert!(matches!(
            session.phase,
            Phase::Finished {
                outcome: Outcome::Winner(PlayerRole::P1)
            }
        ));
    }

    #[test]
    fn test_draft_timeout_with_neither_ready_is_draw() {
        let cfg = RulesConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = create_lobby(&mut rng, "alice", true, 0);
        join_lobby(&mut session, "bob", 0).unwrap();

        assert!(check_draft_timeout(&mut session, &cfg, 100_000));
        assert!(matches!(
            session.phase,
            Phase::Finished {
                outcome: Outcome::Draw
            }
        ));
    }

    #[test]
    fn test_turn_timeout_advances_like_end_turn() {
        let cfg = RulesConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = playing_session(&mut rng);

        assert!(!check_turn_timeout(&mut session, &cfg, &mut rng, 95_000).unwrap());
        assert!(check_turn_timeout(&mut session, &cfg, &mut rng, 95_001).unwrap());
        let battle = session.battle().unwrap();
        assert_eq!(battle.turn, 2);
        assert_eq!(battle.active_player, PlayerRole::P2);
    }
}
