//! Rules constants - all tunable values in one place

// Board extent (tiles per side)
pub const BOARD_WIDTH: i32 = 12;
pub const BOARD_HEIGHT: i32 = 12;

// Map generation
pub const WALL_SEED_CHANCE: f64 = 0.35;
pub const AUTOMATON_ITERATIONS: u32 = 4;
pub const WALL_SURVIVE_NEIGHBORS: u8 = 4;
pub const WALL_BIRTH_NEIGHBORS: u8 = 5;
pub const HIGHGROUND_CHANCE: f64 = 0.10;
pub const SPAWN_ROWS: i32 = 2;

// Combat multipliers
pub const FRONT_MULTIPLIER: f64 = 1.0;
pub const FLANK_MULTIPLIER: f64 = 1.25;
pub const REAR_MULTIPLIER: f64 = 1.5;
pub const SHIELD_MULTIPLIER: f64 = 0.8;

// Elevation
pub const ELEVATION_DAMAGE_BONUS: i32 = 10;
pub const ELEVATION_RANGE_BONUS: u32 = 1;

// Abilities
pub const HEAL_AMOUNT: i32 = 15;
pub const SCAN_RADIUS: i32 = 1; // 3x3 block
pub const SUDO_ATTACK_MULTIPLIER: i32 = 2;

// Draft
pub const SQUAD_BUDGET: u32 = 1000;

// Turn economy
pub const PANIC_FIRST_TURN: u32 = 3;
pub const PANIC_CHANCE: f64 = 0.20;
pub const RAP_GAIN_INTERVAL: u32 = 3;
pub const RAP_CAP: u8 = 3;

// Timeouts (milliseconds; 90s nominal + 5s poll buffer)
pub const DRAFT_TIMEOUT_MS: u64 = 95_000;
pub const TURN_TIMEOUT_MS: u64 = 95_000;

// Lobby join codes; lookalike characters (O/0, I/1) are excluded
pub const LOBBY_CODE_LEN: usize = 4;
pub const LOBBY_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_multiplier_ordering() {
        assert!(REAR_MULTIPLIER > FLANK_MULTIPLIER);
        assert!(FLANK_MULTIPLIER > FRONT_MULTIPLIER);
    }

    #[test]
    fn test_shield_reduces_damage() {
        assert!(SHIELD_MULTIPLIER < 1.0);
    }

    #[test]
    fn test_board_fits_spawn_zones() {
        assert!(BOARD_HEIGHT > 2 * SPAWN_ROWS);
    }

    #[test]
    fn test_code_charset_has_no_lookalikes() {
        for c in [b'O', b'0', b'I', b'1'] {
            assert!(!LOBBY_CODE_CHARSET.contains(&c));
        }
    }
}
