//! Fog-of-war bookkeeping and stealth-aware unit queries

use crate::core::types::{GridPos, PlayerRole};
use crate::geometry::visible_tiles;
use crate::session::state::BattleState;
use crate::units::Unit;

/// Merge a unit's current line-of-sight view into its owner's map memory
///
/// Revealed tiles are permanent; fog of war never re-hides them.
pub fn reveal_unit_view(battle: &mut BattleState, owner: PlayerRole, from: GridPos, vision: u32) {
    let cells = visible_tiles(from, vision, &battle.map);
    battle.reveal(owner, cells);
}

/// Units the given player is allowed to see
///
/// Enemy Scouts stay hidden while cloaked unless one of the viewer's units
/// stands within Manhattan distance 1.
pub fn visible_units(battle: &BattleState, viewer: PlayerRole) -> Vec<&Unit> {
    battle
        .units
        .iter()
        .filter(|u| {
            if u.owner == viewer || !u.stealthed {
                return true;
            }
            battle
                .units
                .iter()
                .any(|v| v.owner == viewer && v.pos.manhattan(&u.pos) <= 1)
        })
        .collect()
}
