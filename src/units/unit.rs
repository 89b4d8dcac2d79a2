//! The unit record mutated during play

use serde::{Deserialize, Serialize};

use crate::core::types::{Facing, GridPos, PlayerRole, UnitId};
use crate::units::archetype::Archetype;

/// A single unit on the board
///
/// A unit at 0 hp does not exist: resolution removes it from the list
/// instead of flagging it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub owner: PlayerRole,
    pub archetype: Archetype,
    pub pos: GridPos,
    pub facing: Facing,
    pub hp: i32,
    pub max_hp: i32,
    pub ap: u8,
    pub max_ap: u8,
    pub attack: i32,
    pub range: u32,
    pub vision: u32,
    /// Scout cloak; meaningless for other archetypes
    pub stealthed: bool,
    /// Watched direction while holding overwatch
    pub overwatch: Option<Facing>,
}

impl Unit {
    /// Materialize a fresh unit from its archetype template
    pub fn spawn(owner: PlayerRole, archetype: Archetype, pos: GridPos, facing: Facing) -> Self {
        let t = archetype.template();
        Self {
            id: UnitId::new(),
            owner,
            archetype,
            pos,
            facing,
            hp: t.hp,
            max_hp: t.hp,
            ap: t.ap,
            max_ap: t.ap,
            attack: t.attack,
            range: t.range,
            vision: t.vision,
            stealthed: matches!(archetype, Archetype::Scout),
            overwatch: None,
        }
    }

    /// Is this unit holding overwatch?
    pub fn is_overwatching(&self) -> bool {
        self.overwatch.is_some()
    }

    /// Drop any held overwatch
    pub fn clear_overwatch(&mut self) {
        self.overwatch = None;
    }
}
