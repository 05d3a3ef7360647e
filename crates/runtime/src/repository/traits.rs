//! Repository contract for saving and loading characters.

use game_core::Character;

use super::error::{RepositoryError, Result};

/// Repository for character persistence.
///
/// Characters are keyed by name. Every save fully replaces the previous
/// record for that name.
pub trait CharacterRepository: Send + Sync {
    /// Save a character under its name.
    fn save(&self, character: &Character) -> Result<()>;

    /// Load a character by name.
    ///
    /// Fails with [`RepositoryError::CharacterNotFound`] if there is no
    /// record, or with [`RepositoryError::Codec`] if the record is corrupted.
    fn load(&self, name: &str) -> Result<Character>;

    /// Check if a record exists.
    fn exists(&self, name: &str) -> bool;

    /// Delete a record. Fails with [`RepositoryError::CharacterNotFound`] if
    /// there is none.
    fn delete(&self, name: &str) -> Result<()>;

    /// List saved character names, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Rejects names that cannot safely key a record.
///
/// Names must be non-empty, must not start or end with whitespace and must not
/// contain path separators, `..` or control characters.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.trim() != name
        || name.contains(['/', '\\'])
        || name.contains("..")
        || name.chars().any(char::is_control);

    if invalid {
        return Err(RepositoryError::InvalidName(name.to_string()));
    }
    Ok(())
}
