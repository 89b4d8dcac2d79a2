//! Session snapshot: lifecycle phases and the battle state
//!
//! The phase is a tagged union with phase-specific payloads, so illegal
//! combinations (a draw offer in a finished game, a squad before drafting)
//! are unrepresentable.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::{Rejection, Result};
use crate::core::types::{GridPos, PlayerRole, SessionId, Timestamp, UnitId};
use crate::map::GameMap;
use crate::session::disruption::Disruption;
use crate::units::{Archetype, Unit};

/// A game session snapshot
///
/// Player handles are opaque tokens minted by the identity collaborator;
/// the engine only maps them onto seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Join code handed to the second player
    pub code: String,
    pub is_public: bool,
    pub p1: String,
    pub p2: Option<String>,
    pub last_action_at: Timestamp,
    pub phase: Phase,
}

/// Lifecycle phase with phase-specific payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for an opponent
    Lobby,
    /// Both players pick squads against the budget
    Drafting(DraftState),
    /// The tactical simulation proper
    Playing(BattleState),
    /// Terminal
    Finished { outcome: Outcome },
}

/// Draft progress for both seats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftState {
    pub started_at: Timestamp,
    pub p1_squad: Option<Vec<Archetype>>,
    pub p2_squad: Option<Vec<Archetype>>,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(PlayerRole),
    Draw,
}

/// Per-seat pair of values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    pub p1: T,
    pub p2: T,
}

impl<T> PerPlayer<T> {
    pub fn get(&self, role: PlayerRole) -> &T {
        match role {
            PlayerRole::P1 => &self.p1,
            PlayerRole::P2 => &self.p2,
        }
    }

    pub fn get_mut(&mut self, role: PlayerRole) -> &mut T {
        match role {
            PlayerRole::P1 => &mut self.p1,
            PlayerRole::P2 => &mut self.p2,
        }
    }
}

/// Mutable battle snapshot while the session is playing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    /// Turn counter, starting at 1
    pub turn: u32,
    pub active_player: PlayerRole,
    pub map: GameMap,
    pub units: Vec<Unit>,
    /// Permanent fog-of-war memory; only ever grows
    pub revealed: PerPlayer<AHashSet<GridPos>>,
    /// Override resource, capped at 3 per seat
    pub rap: PerPlayer<u8>,
    /// Disruption rolled for the current turn
    pub disruption: Option<Disruption>,
    pub turn_started_at: Timestamp,
    pub draw_offer: Option<PlayerRole>,
}

impl Session {
    /// Seat for a player handle
    pub fn role_of(&self, player: &str) -> Result<PlayerRole> {
        if self.p1 == player {
            Ok(PlayerRole::P1)
        } else if self.p2.as_deref() == Some(player) {
            Ok(PlayerRole::P2)
        } else {
            Err(Rejection::NotAPlayer)
        }
    }

    /// Battle payload, rejecting every other phase
    pub fn battle(&self) -> Result<&BattleState> {
        match &self.phase {
            Phase::Playing(battle) => Ok(battle),
            _ => Err(Rejection::InvalidGameState),
        }
    }

    /// Mutable battle payload, rejecting every other phase
    pub fn battle_mut(&mut self) -> Result<&mut BattleState> {
        match &mut self.phase {
            Phase::Playing(battle) => Ok(battle),
            _ => Err(Rejection::InvalidGameState),
        }
    }

    /// Terminate the session
    pub fn finish(&mut self, outcome: Outcome) {
        tracing::info!(?outcome, "session finished");
        self.phase = Phase::Finished { outcome };
    }
}

impl BattleState {
    /// Unit lookup by id
    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or(Rejection::UnitNotFound)
    }

    /// Mutable unit lookup by id
    pub fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit> {
        self.units
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(Rejection::UnitNotFound)
    }

    /// Remove a destroyed unit from the active set
    pub fn remove_unit(&mut self, id: UnitId) {
        self.units.retain(|u| u.id != id);
    }

    /// Does this player still control any units?
    pub fn has_units(&self, role: PlayerRole) -> bool {
        self.units.iter().any(|u| u.owner == role)
    }

    /// Merge cells into a player's permanent revealed set
    pub fn reveal(&mut self, role: PlayerRole, cells: impl IntoIterator<Item = GridPos>) {
        self.revealed.get_mut(role).extend(cells);
    }
}
