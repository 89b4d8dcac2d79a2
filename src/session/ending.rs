//! Concessions: forfeit and draw agreements

use crate::core::error::{Rejection, Result};
use crate::core::types::Timestamp;
use crate::session::state::{Outcome, Session};

/// Concede the game; the opponent wins
pub fn forfeit(session: &mut Session, player: &str, now: Timestamp) -> Result<()> {
    let role = session.role_of(player)?;
    session.battle()?;

    session.finish(Outcome::Winner(role.opponent()));
    session.last_action_at = now;
    Ok(())
}

/// Put a draw on the table
///
/// A later offer from either side simply replaces the current one.
pub fn offer_draw(session: &mut Session, player: &str, now: Timestamp) -> Result<()> {
    let role = session.role_of(player)?;
    let battle = session.battle_mut()?;

    battle.draw_offer = Some(role);
    session.last_action_at = now;
    Ok(())
}

/// Accept the opponent's draw offer
pub fn accept_draw(session: &mut Session, player: &str, now: Timestamp) -> Result<()> {
    let role = session.role_of(player)?;
    let battle = session.battle()?;

    let offer = battle.draw_offer.ok_or(Rejection::NoDrawOffer)?;
    if offer == role {
        return Err(Rejection::CannotAcceptOwnOffer);
    }

    session.finish(Outcome::Draw);
    session.last_action_at = now;
    Ok(())
}
