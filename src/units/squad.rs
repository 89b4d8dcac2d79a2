//! Draft budgeting and spawn placement

use crate::core::error::{Rejection, Result};
use crate::core::types::{Facing, GridPos, PlayerRole};
use crate::map::GameMap;
use crate::units::archetype::Archetype;
use crate::units::unit::Unit;

/// Parse raw draft tokens into archetype picks
pub fn parse_squad<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Archetype>> {
    tokens
        .iter()
        .map(|t| Archetype::from_token(t.as_ref()))
        .collect()
}

/// Total credit cost of a squad
pub fn squad_cost(squad: &[Archetype]) -> u32 {
    squad.iter().map(|a| a.template().cost).sum()
}

/// Reject squads over the credit budget
///
/// Any mix and any repeats are legal under the budget.
pub fn validate_squad(squad: &[Archetype], budget: u32) -> Result<()> {
    if squad_cost(squad) > budget {
        return Err(Rejection::BudgetExceeded);
    }
    Ok(())
}

/// Place both squads on their home rows
///
/// P1 spawns along the south edge facing north, P2 along the north edge
/// facing south, spread eastward from x=2 in pick order. Scouts arrive
/// cloaked.
pub fn spawn_squads(p1: &[Archetype], p2: &[Archetype], map: &GameMap) -> Vec<Unit> {
    let mut units = Vec::with_capacity(p1.len() + p2.len());

    for (i, archetype) in p1.iter().enumerate() {
        units.push(Unit::spawn(
            PlayerRole::P1,
            *archetype,
            GridPos::new(2 + i as i32, map.height - 2),
            Facing::North,
        ));
    }

    for (i, archetype) in p2.iter().enumerate() {
        units.push(Unit::spawn(
            PlayerRole::P2,
            *archetype,
            GridPos::new(2 + i as i32, 1),
            Facing::South,
        ));
    }

    units
}
