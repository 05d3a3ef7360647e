//! Character model errors.

use crate::error::{ErrorCategory, GameError};

/// Errors raised by character creation and mutation.
///
/// A failed operation never leaves the character partially mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// Class name is not one of the playable classes.
    #[error("invalid class: {0}")]
    InvalidClass(String),

    /// Character has no health left.
    #[error("character '{name}' is dead")]
    CharacterDead { name: String },

    /// Gold would drop below zero (or overflow).
    #[error("cannot change gold {gold} by {amount}")]
    InvalidGoldOperation { gold: u32, amount: i64 },
}

impl GameError for CharacterError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidClass(_) => ErrorCategory::Validation,
            Self::CharacterDead { .. } => ErrorCategory::State,
            Self::InvalidGoldOperation { .. } => ErrorCategory::Economic,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidClass(_) => "CHARACTER_INVALID_CLASS",
            Self::CharacterDead { .. } => "CHARACTER_DEAD",
            Self::InvalidGoldOperation { .. } => "CHARACTER_INVALID_GOLD_OPERATION",
        }
    }
}
