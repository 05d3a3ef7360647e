//! Unified error type surfaced by the session API.
//!
//! Wraps failures from the character model, battles, the quest log, the shop
//! and repositories so the session loop can report them by category.

use game_content::ContentError;
use game_core::{CharacterError, CombatError, ErrorCategory, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
use crate::quests::QuestError;
use crate::shop::InventoryError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{name} is not dead")]
    NotDead { name: String },

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl GameError for SessionError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::NotDead { .. } => ErrorCategory::State,
            Self::Character(error) => error.category(),
            Self::Combat(error) => error.category(),
            Self::Quest(error) => error.category(),
            Self::Inventory(error) => error.category(),
            Self::Repository(error) => error.category(),
            Self::Content(error) => error.category(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotDead { .. } => "SESSION_NOT_DEAD",
            Self::Character(error) => error.error_code(),
            Self::Combat(error) => error.error_code(),
            Self::Quest(error) => error.error_code(),
            Self::Inventory(error) => error.error_code(),
            Self::Repository(error) => error.error_code(),
            Self::Content(error) => error.error_code(),
        }
    }
}
