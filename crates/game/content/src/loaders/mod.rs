//! Content loaders for reading game data from files.
//!
//! Definition files are parsed by [`crate::definitions`]; this module maps
//! filesystem failures onto [`ContentError`] and knows the data directory
//! layout.

pub mod config;
pub mod defaults;
pub mod factory;

pub use config::ConfigLoader;
pub use defaults::create_default_data_files;
pub use factory::ContentFactory;

use std::io::ErrorKind;
use std::path::Path;

use crate::ContentError;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, ContentError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ContentError::MissingDataFile {
            path: path.to_path_buf(),
        },
        _ => ContentError::CorruptedData {
            path: path.to_path_buf(),
            source,
        },
    })
}
