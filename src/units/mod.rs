//! Units: archetype catalog, the unit record, squad budgeting

pub mod archetype;
pub mod squad;
pub mod unit;

pub use archetype::{Archetype, UnitTemplate};
pub use squad::{parse_squad, spawn_squads, squad_cost, validate_squad};
pub use unit::Unit;
