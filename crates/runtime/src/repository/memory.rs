//! In-memory CharacterRepository implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::{Character, decode, encode};

use super::{CharacterRepository, RepositoryError, Result, validate_name};

/// In-memory implementation of CharacterRepository.
///
/// Records are kept encoded, so loading goes through the same codec as the
/// file repository.
#[derive(Debug, Default)]
pub struct InMemoryCharacterRepository {
    records: RwLock<BTreeMap<String, String>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw record text under `name`, bypassing the encoder.
    pub fn insert_raw(&self, name: impl Into<String>, text: impl Into<String>) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(name.into(), text.into());
        Ok(())
    }
}

impl CharacterRepository for InMemoryCharacterRepository {
    fn save(&self, character: &Character) -> Result<()> {
        validate_name(&character.name)?;
        self.insert_raw(character.name.clone(), encode(character))
    }

    fn load(&self, name: &str) -> Result<Character> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let text = records
            .get(name)
            .ok_or_else(|| RepositoryError::CharacterNotFound {
                name: name.to_string(),
            })?;
        Ok(decode(text)?)
    }

    fn exists(&self, name: &str) -> bool {
        self.records
            .read()
            .is_ok_and(|records| records.contains_key(name))
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::CharacterNotFound {
                name: name.to_string(),
            })
    }

    fn list(&self) -> Result<Vec<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CharacterClass, CodecError};

    #[test]
    fn save_load_delete() {
        let repo = InMemoryCharacterRepository::new();
        let mut hero = Character::new("Hero", CharacterClass::Cleric);
        hero.inventory.push("health_potion".into());

        repo.save(&hero).unwrap();
        assert!(repo.exists("Hero"));
        assert_eq!(repo.load("Hero").unwrap(), hero);

        repo.delete("Hero").unwrap();
        assert!(!repo.exists("Hero"));
        assert!(matches!(
            repo.delete("Hero"),
            Err(RepositoryError::CharacterNotFound { .. })
        ));
    }

    #[test]
    fn corrupted_record_surfaces_codec_error() {
        let repo = InMemoryCharacterRepository::new();
        repo.insert_raw("Broken", "NAME Broken\n").unwrap();

        assert!(matches!(
            repo.load("Broken"),
            Err(RepositoryError::Codec(CodecError::SaveFileCorrupted { line: 1, .. }))
        ));
    }
}
