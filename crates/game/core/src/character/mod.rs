//! Player character model.
//!
//! This module contains the character record and everything that mutates it:
//! - `Character`: the persisted player record
//! - `CharacterClass`: the four playable classes and their base stats
//! - Progression: experience, gold, healing and revival (see [`progression`])

mod error;
mod progression;

pub use error::CharacterError;

use crate::config::GameConfig;

/// Playable character class.
///
/// The class fixes the starting stat block. After creation it only matters for
/// choosing the special ability in battle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

/// Starting stats for a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseStats {
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
}

impl CharacterClass {
    pub const ALL: [Self; 4] = [Self::Warrior, Self::Mage, Self::Rogue, Self::Cleric];

    pub const fn base_stats(self) -> BaseStats {
        match self {
            Self::Warrior => BaseStats {
                health: 120,
                strength: 15,
                magic: 5,
            },
            Self::Mage => BaseStats {
                health: 80,
                strength: 8,
                magic: 20,
            },
            Self::Rogue => BaseStats {
                health: 90,
                strength: 12,
                magic: 10,
            },
            Self::Cleric => BaseStats {
                health: 100,
                strength: 10,
                magic: 15,
            },
        }
    }

    /// Case-insensitive lookup, used where class names come from free text.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_ref().eq_ignore_ascii_case(name.trim()))
    }
}

/// A player character.
///
/// # Invariants
///
/// - `health <= max_health` and `max_health > 0`
/// - `level >= 1`
/// - `class` never changes after creation
///
/// Gold and experience are unsigned, so they cannot go negative; the mutation
/// methods reject operations that would try.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub experience: u32,
    pub gold: u32,
    pub inventory: Vec<String>,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
}

impl Character {
    /// Creates a level 1 character with the base stats of `class`.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let base = class.base_stats();
        Self {
            name: name.into(),
            class,
            level: GameConfig::STARTING_LEVEL,
            health: base.health,
            max_health: base.health,
            strength: base.strength,
            magic: base.magic,
            experience: 0,
            gold: GameConfig::STARTING_GOLD,
            inventory: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
        }
    }

    /// Creates a character from a class name.
    ///
    /// Fails with [`CharacterError::InvalidClass`] unless `class` is exactly
    /// one of `Warrior`, `Mage`, `Rogue` or `Cleric`.
    pub fn create(name: impl Into<String>, class: &str) -> Result<Self, CharacterError> {
        let class = class
            .parse::<CharacterClass>()
            .map_err(|_| CharacterError::InvalidClass(class.to_string()))?;
        Ok(Self::new(name, class))
    }

    /// Experience required to advance from the current level.
    pub fn experience_to_next_level(&self) -> u32 {
        self.level.saturating_mul(GameConfig::XP_PER_LEVEL)
    }
}
