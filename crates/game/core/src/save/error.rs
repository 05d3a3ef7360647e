//! Save codec errors.

use crate::error::{ErrorCategory, GameError};

/// Errors raised while decoding a save record.
///
/// Corrupted records are reported, never repaired.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A line is not of the form `KEY: value`.
    #[error("save file corrupted at line {line}: {content:?}")]
    SaveFileCorrupted { line: usize, content: String },

    /// The record parsed but is missing fields or holds values of the wrong type.
    #[error("invalid save data: {0}")]
    InvalidSaveData(String),
}

impl GameError for CodecError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SaveFileCorrupted { .. } => "SAVE_FILE_CORRUPTED",
            Self::InvalidSaveData(_) => "SAVE_INVALID_DATA",
        }
    }
}
