//! Scan detection filtering

use crate::core::types::PlayerRole;
use crate::units::{Archetype, Unit};

/// Hostiles a scan reports: the scanner's enemies, Scouts excluded
///
/// Scouts never show on a scan, cloaked or not. Ordering follows the input
/// list and carries no meaning.
pub fn scanned_hostiles(units: &[Unit], scanner: PlayerRole) -> Vec<&Unit> {
    units
        .iter()
        .filter(|u| u.owner != scanner && u.archetype != Archetype::Scout)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Facing, GridPos};

    fn unit(owner: PlayerRole, archetype: Archetype) -> Unit {
        Unit::spawn(owner, archetype, GridPos::new(0, 0), Facing::North)
    }

    #[test]
    fn test_friendlies_filtered_out() {
        let units = vec![
            unit(PlayerRole::P1, Archetype::Knight),
            unit(PlayerRole::P2, Archetype::Knight),
        ];
        let hostiles = scanned_hostiles(&units, PlayerRole::P1);
        assert_eq!(hostiles.len(), 1);
        assert_eq!(hostiles[0].owner, PlayerRole::P2);
    }

    #[test]
    fn test_scouts_are_scan_immune() {
        let mut cloaked = unit(PlayerRole::P2, Archetype::Scout);
        cloaked.stealthed = true;
        let mut exposed = unit(PlayerRole::P2, Archetype::Scout);
        exposed.stealthed = false;
        let units = vec![cloaked, exposed, unit(PlayerRole::P2, Archetype::Medic)];

        let hostiles = scanned_hostiles(&units, PlayerRole::P1);
        assert_eq!(hostiles.len(), 1);
        assert_eq!(hostiles[0].archetype, Archetype::Medic);
    }
}
