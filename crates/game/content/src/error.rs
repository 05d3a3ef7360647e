//! Content loading errors.

use std::path::PathBuf;

use game_core::{ErrorCategory, GameError};

/// Errors raised while reading definition files.
///
/// Bad definitions are reported, never skipped or repaired.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The data file does not exist.
    #[error("data file '{}' not found", path.display())]
    MissingDataFile { path: PathBuf },

    /// A block is malformed, incomplete or holds a value of the wrong type.
    #[error("invalid data format: {0}")]
    InvalidDataFormat(String),

    /// The data file exists but could not be read.
    #[error("data file '{}' is corrupted: {source}", path.display())]
    CorruptedData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A default data file could not be written.
    #[error("failed to write data file '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GameError for ContentError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDataFile { .. } => ErrorCategory::NotFound,
            Self::InvalidDataFormat(_) => ErrorCategory::Validation,
            Self::CorruptedData { .. } | Self::WriteFailed { .. } => ErrorCategory::Resource,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDataFile { .. } => "CONTENT_MISSING_DATA_FILE",
            Self::InvalidDataFormat(_) => "CONTENT_INVALID_DATA_FORMAT",
            Self::CorruptedData { .. } => "CONTENT_CORRUPTED_DATA",
            Self::WriteFailed { .. } => "CONTENT_WRITE_FAILED",
        }
    }
}
