//! Repository layer for character records.
//!
//! Repositories handle data that CHANGES during play: the character record.
//! Quest and item definitions are static content loaded by `game-content`.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileCharacterRepository, SAVE_FILE_SUFFIX};
pub use memory::InMemoryCharacterRepository;
pub use traits::{CharacterRepository, validate_name};
