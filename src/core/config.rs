//! Rules configuration with documented tunables
//!
//! Defaults reproduce the standard 12x12 ladder rules. Custom lobbies may
//! load overrides from TOML.

use serde::Deserialize;

use crate::constants::{
    BOARD_HEIGHT, BOARD_WIDTH, DRAFT_TIMEOUT_MS, SQUAD_BUDGET, TURN_TIMEOUT_MS,
};

/// Tunable parameters for a rules instance
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Board width in tiles
    pub board_width: i32,

    /// Board height in tiles
    ///
    /// Must leave room for both spawn zones; the generator forces the two
    /// rows nearest each short edge to floor.
    pub board_height: i32,

    /// Credit budget for a drafted squad
    pub squad_budget: u32,

    /// Draft window before the timeout sweep auto-forfeits (milliseconds)
    pub draft_timeout_ms: u64,

    /// Turn window before the timeout sweep auto-advances (milliseconds)
    pub turn_timeout_ms: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            squad_budget: SQUAD_BUDGET,
            draft_timeout_ms: DRAFT_TIMEOUT_MS,
            turn_timeout_ms: TURN_TIMEOUT_MS,
        }
    }
}

impl RulesConfig {
    /// Parse overrides from a TOML document
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
