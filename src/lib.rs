//! Gridfall - deterministic rules engine for a two-player grid tactics game
//!
//! A pure simulation core: every entry point consumes a snapshot of session
//! and unit state, validates one player action, and produces the mutated
//! snapshot plus a result payload. Storage, transport, and presentation are
//! external collaborators; randomness and the clock are injected.

pub mod combat;
pub mod constants;
pub mod core;
pub mod geometry;
pub mod map;
pub mod movement;
pub mod session;
pub mod spatial;
pub mod units;

// Re-exports for convenient access
pub use crate::combat::{calculate_damage, scanned_hostiles, AttackZone, DamageReport};
pub use crate::core::config::RulesConfig;
pub use crate::core::error::{Rejection, Result};
pub use crate::core::types::{Facing, GridPos, PlayerRole, SessionId, Timestamp, UnitId};
pub use crate::geometry::{facing_toward, has_line_of_sight, is_in_range, manhattan_distance, visible_tiles};
pub use crate::map::{generate_map, GameMap, TileKind};
pub use crate::movement::{is_valid_move, MoveCheck};
pub use crate::session::{apply, ActionReport, BattleState, Outcome, Phase, PlayerAction, Session};
pub use crate::units::{Archetype, Unit};
