//! Combat errors.

use crate::error::{ErrorCategory, GameError};

/// Errors raised by the enemy factory and the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// Enemy type is not in the enemy table.
    #[error("enemy type '{0}' is not recognized")]
    InvalidTarget(String),

    /// Battle cannot start (or continue) with a dead character.
    #[error("character '{name}' is dead")]
    CharacterDead { name: String },

    /// Turn advanced after the battle reached a terminal state.
    #[error("combat is not active")]
    CombatNotActive,
}

impl GameError for CombatError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTarget(_) => ErrorCategory::Validation,
            Self::CharacterDead { .. } | Self::CombatNotActive => ErrorCategory::State,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "COMBAT_INVALID_TARGET",
            Self::CharacterDead { .. } => "COMBAT_CHARACTER_DEAD",
            Self::CombatNotActive => "COMBAT_NOT_ACTIVE",
        }
    }
}
