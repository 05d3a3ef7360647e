//! Error types raised by repository implementations.

use std::path::PathBuf;

use game_core::{CodecError, ErrorCategory, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("character '{name}' not found")]
    CharacterNotFound { name: String },

    #[error("invalid character name {0:?}")]
    InvalidName(String),

    #[error("permission denied for {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("character repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl RepositoryError {
    /// Maps an I/O failure on `path`, singling out permission errors.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.into(),
                source,
            },
            _ => Self::Io(source),
        }
    }
}

impl GameError for RepositoryError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::CharacterNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidName(_) => ErrorCategory::Validation,
            Self::PermissionDenied { .. } | Self::LockPoisoned | Self::Io(_) => {
                ErrorCategory::Resource
            }
            Self::Codec(error) => error.category(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterNotFound { .. } => "REPOSITORY_CHARACTER_NOT_FOUND",
            Self::InvalidName(_) => "REPOSITORY_INVALID_NAME",
            Self::PermissionDenied { .. } => "REPOSITORY_PERMISSION_DENIED",
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Codec(error) => error.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
