//! Session state machine and action orchestration

pub mod actions;
pub mod disruption;
pub mod draft;
pub mod ending;
pub mod lobby;
pub mod overwatch;
pub mod state;
pub mod sudo;
pub mod turns;
pub mod visibility;

// Re-exports for convenient access
pub use actions::{apply, ActionReport, PlayerAction};
pub use disruption::Disruption;
pub use draft::submit_squad;
pub use ending::{accept_draw, forfeit, offer_draw};
pub use lobby::{create_lobby, generate_code, join_lobby, require_lobby};
pub use overwatch::set_overwatch;
pub use state::{BattleState, DraftState, Outcome, PerPlayer, Phase, Session};
pub use turns::{advance_turn, check_draft_timeout, check_turn_timeout, end_turn};
pub use visibility::{reveal_unit_view, visible_units};
