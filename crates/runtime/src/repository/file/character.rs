//! File-based CharacterRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use game_core::{Character, CodecError, decode, encode};

use crate::repository::{CharacterRepository, RepositoryError, Result, validate_name};

/// Suffix appended to the character name to form the save file name.
pub const SAVE_FILE_SUFFIX: &str = "_save.txt";

/// File-based implementation of CharacterRepository.
///
/// # File Format
///
/// Each character is stored as `{name}_save.txt` in the save record format
/// (one `KEY: value` line per field, see [`game_core::save`]).
#[derive(Clone, Debug)]
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a new file-based character repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(|e| RepositoryError::from_io(&base_dir, e))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a save file.
    fn save_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.base_dir.join(format!("{name}{SAVE_FILE_SUFFIX}")))
    }
}

/// Reports the first line holding invalid UTF-8 as corrupted.
fn not_utf8(err: FromUtf8Error) -> CodecError {
    let bytes = err.as_bytes();
    let valid = err.utf8_error().valid_up_to();
    let line_start = bytes[..valid]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line_end = bytes[valid..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |i| valid + i);

    CodecError::SaveFileCorrupted {
        line: bytes[..valid].iter().filter(|&&b| b == b'\n').count() + 1,
        content: String::from_utf8_lossy(&bytes[line_start..line_end]).into_owned(),
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, character: &Character) -> Result<()> {
        let path = self.save_path(&character.name)?;
        let temp_path = path.with_extension("txt.tmp");

        fs::create_dir_all(&self.base_dir)
            .map_err(|e| RepositoryError::from_io(&self.base_dir, e))?;

        fs::write(&temp_path, encode(character))
            .map_err(|e| RepositoryError::from_io(&temp_path, e))?;

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(RepositoryError::from_io(&path, e));
        }

        tracing::debug!("Saved character '{}' to {}", character.name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Character> {
        let path = self.save_path(name)?;

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepositoryError::CharacterNotFound {
                name: name.to_string(),
            },
            _ => RepositoryError::from_io(&path, e),
        })?;
        let text = String::from_utf8(bytes).map_err(not_utf8)?;
        let character = decode(&text)?;

        tracing::debug!("Loaded character '{}' from {}", name, path.display());

        Ok(character)
    }

    fn exists(&self, name: &str) -> bool {
        self.save_path(name).is_ok_and(|path| path.is_file())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.save_path(name)?;

        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepositoryError::CharacterNotFound {
                name: name.to_string(),
            },
            _ => RepositoryError::from_io(&path, e),
        })?;

        tracing::debug!("Deleted character '{}'", name);

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(RepositoryError::from_io(&self.base_dir, e)),
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if path.is_file()
                && let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = filename.strip_suffix(SAVE_FILE_SUFFIX)
                && !name.is_empty()
            {
                names.push(name.to_string());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
