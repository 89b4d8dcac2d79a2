//! Movement legality for a single unit displacement
//!
//! Endpoint-only checks: the path between start and target is never
//! inspected, so a unit may vault over occupied or walled tiles as long as
//! the destination itself is legal.

use crate::core::error::{Rejection, Result};
use crate::core::types::{GridPos, UnitId};
use crate::map::GameMap;
use crate::spatial::UnitGrid;
use crate::units::Unit;

/// Verdict surface consumed by the command front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCheck {
    pub valid: bool,
    pub reason: Option<Rejection>,
}

/// Ordered legality checks; the first failure wins
///
/// Returns the AP cost (the Manhattan distance) when legal.
pub fn check_move(
    map: &GameMap,
    units: &[Unit],
    grid: &UnitGrid,
    mover: UnitId,
    target: GridPos,
    ap: u8,
) -> Result<u8> {
    if !map.in_bounds(target) {
        return Err(Rejection::OutOfBounds);
    }
    if map.is_wall(target) {
        return Err(Rejection::ObstructedByWall);
    }

    let unit = units
        .iter()
        .find(|u| u.id == mover)
        .ok_or(Rejection::UnitNotFound)?;

    let distance = unit.pos.manhattan(&target);
    if distance == 0 {
        return Err(Rejection::StationaryMove);
    }
    if distance > ap as u32 {
        return Err(Rejection::InsufficientAp);
    }

    if grid.is_occupied_by_other(target, mover) {
        return Err(Rejection::ObstructedByUnit);
    }

    Ok(distance as u8)
}

/// Legality check over a raw unit list
pub fn is_valid_move(
    map: &GameMap,
    units: &[Unit],
    mover: UnitId,
    target: GridPos,
    ap: u8,
) -> MoveCheck {
    let grid = UnitGrid::build(units);
    match check_move(map, units, &grid, mover, target, ap) {
        Ok(_) => MoveCheck {
            valid: true,
            reason: None,
        },
        Err(reason) => MoveCheck {
            valid: false,
            reason: Some(reason),
        },
    }
}
