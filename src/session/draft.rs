//! Squad submission and battle start

use rand::Rng;
use tracing::info;

use crate::core::config::RulesConfig;
use crate::core::error::{Rejection, Result};
use crate::core::types::{PlayerRole, Timestamp};
use crate::map::generate_map;
use crate::session::state::{BattleState, PerPlayer, Phase, Session};
use crate::units::{spawn_squads, validate_squad, Archetype};

/// Submit a player's draft picks
///
/// The second valid squad triggers map generation and spawn: the session
/// moves straight to playing.
pub fn submit_squad(
    session: &mut Session,
    cfg: &RulesConfig,
    player: &str,
    squad: &[Archetype],
    rng: &mut impl Rng,
    now: Timestamp,
) -> Result<()> {
    {
        let draft = match &mut session.phase {
            Phase::Drafting(draft) => draft,
            _ => return Err(Rejection::InvalidGameState),
        };

        validate_squad(squad, cfg.squad_budget)?;

        let role = if session.p1 == player {
            PlayerRole::P1
        } else if session.p2.as_deref() == Some(player) {
            PlayerRole::P2
        } else {
            return Err(Rejection::NotAPlayer);
        };

        match role {
            PlayerRole::P1 => draft.p1_squad = Some(squad.to_vec()),
            PlayerRole::P2 => draft.p2_squad = Some(squad.to_vec()),
        }
        session.last_action_at = now;
    }

    let ready = match &session.phase {
        Phase::Drafting(draft) => draft.p1_squad.is_some() && draft.p2_squad.is_some(),
        _ => false,
    };
    if ready {
        start_battle(session, cfg, rng, now);
    }
    Ok(())
}

/// Generate the board, spawn both squads, and enter play
fn start_battle(session: &mut Session, cfg: &RulesConfig, rng: &mut impl Rng, now: Timestamp) {
    let (p1_squad, p2_squad) = match &session.phase {
        Phase::Drafting(draft) => (
            draft.p1_squad.clone().unwrap_or_default(),
            draft.p2_squad.clone().unwrap_or_default(),
        ),
        _ => return,
    };

    let map = generate_map(rng, cfg.board_width, cfg.board_height);
    let units = spawn_squads(&p1_squad, &p2_squad, &map);

    info!(units = units.len(), "draft complete, battle starting");
    session.phase = Phase::Playing(BattleState {
        turn: 1,
        active_player: PlayerRole::P1,
        map,
        units,
        revealed: PerPlayer::default(),
        rap: PerPlayer::default(),
        disruption: None,
        turn_started_at: now,
        draw_offer: None,
    });
}
