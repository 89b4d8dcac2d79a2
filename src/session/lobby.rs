//! Lobby creation and joining

use rand::Rng;
use tracing::info;

use crate::constants::{LOBBY_CODE_CHARSET, LOBBY_CODE_LEN};
use crate::core::error::{Rejection, Result};
use crate::core::types::{SessionId, Timestamp};
use crate::session::state::{DraftState, Phase, Session};

/// Generate a join code
///
/// The charset drops lookalike characters so codes survive being read
/// aloud. Collision handling belongs to the store that indexes codes.
pub fn generate_code(rng: &mut impl Rng) -> String {
    (0..LOBBY_CODE_LEN)
        .map(|_| LOBBY_CODE_CHARSET[rng.gen_range(0..LOBBY_CODE_CHARSET.len())] as char)
        .collect()
}

/// Open a new lobby hosted by `p1`
pub fn create_lobby(rng: &mut impl Rng, p1: &str, is_public: bool, now: Timestamp) -> Session {
    let session = Session {
        id: SessionId::new(),
        code: generate_code(rng),
        is_public,
        p1: p1.to_string(),
        p2: None,
        last_action_at: now,
        phase: Phase::Lobby,
    };
    info!(code = %session.code, "lobby created");
    session
}

/// Resolve a session looked up by join code
pub fn require_lobby<T>(found: Option<T>) -> Result<T> {
    found.ok_or(Rejection::LobbyNotFound)
}

/// Seat the second player and start the draft clock
pub fn join_lobby(session: &mut Session, p2: &str, now: Timestamp) -> Result<()> {
    if !matches!(session.phase, Phase::Lobby) {
        return Err(Rejection::GameAlreadyStarted);
    }
    if session.p2.is_some() {
        return Err(Rejection::LobbyFull);
    }

    session.p2 = Some(p2.to_string());
    session.phase = Phase::Drafting(DraftState {
        started_at: now,
        ..DraftState::default()
    });
    session.last_action_at = now;
    info!(code = %session.code, "second player joined, drafting");
    Ok(())
}
