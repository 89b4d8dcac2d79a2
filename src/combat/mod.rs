//! Combat resolution: zones, the damage formula, scan filtering

pub mod damage;
pub mod scan;
pub mod zone;

pub use damage::{calculate_damage, damage_against, DamageReport};
pub use scan::scanned_hostiles;
pub use zone::{classify_zone, AttackZone};
