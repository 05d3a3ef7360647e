//! File-based repository implementations.

mod character;

pub use character::{FileCharacterRepository, SAVE_FILE_SUFFIX};
