//! Unit archetypes and their draft templates

use serde::{Deserialize, Serialize};

use crate::core::error::{Rejection, Result};

/// The four draftable archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Front-line melee; tower shield blunts frontal hits
    Knight,
    /// Long-reach ranged attacker
    Archer,
    /// Fast, cloaked reconnaissance; invisible to scans
    Scout,
    /// Adjacent-ally healer; cannot overwatch
    Medic,
}

/// Draft-time cost and base stats for an archetype
#[derive(Debug, Clone, Copy)]
pub struct UnitTemplate {
    pub cost: u32,
    pub hp: i32,
    pub ap: u8,
    pub attack: i32,
    pub range: u32,
    pub vision: u32,
}

impl Archetype {
    /// Fixed catalog values
    pub fn template(&self) -> UnitTemplate {
        match self {
            Archetype::Knight => UnitTemplate {
                cost: 300,
                hp: 100,
                ap: 2,
                attack: 30,
                range: 1,
                vision: 3,
            },
            Archetype::Archer => UnitTemplate {
                cost: 200,
                hp: 60,
                ap: 2,
                attack: 20,
                range: 5,
                vision: 5,
            },
            Archetype::Scout => UnitTemplate {
                cost: 150,
                hp: 50,
                ap: 4,
                attack: 15,
                range: 2,
                vision: 4,
            },
            Archetype::Medic => UnitTemplate {
                cost: 250,
                hp: 70,
                ap: 3,
                attack: 0,
                range: 2,
                vision: 3,
            },
        }
    }

    /// Single-letter draft token
    pub fn token(&self) -> char {
        match self {
            Archetype::Knight => 'K',
            Archetype::Archer => 'A',
            Archetype::Scout => 'S',
            Archetype::Medic => 'M',
        }
    }

    /// Parse a draft token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "K" => Ok(Archetype::Knight),
            "A" => Ok(Archetype::Archer),
            "S" => Ok(Archetype::Scout),
            "M" => Ok(Archetype::Medic),
            _ => Err(Rejection::InvalidUnitType),
        }
    }

    /// All archetypes
    pub fn all() -> [Archetype; 4] {
        [
            Archetype::Knight,
            Archetype::Archer,
            Archetype::Scout,
            Archetype::Medic,
        ]
    }
}
