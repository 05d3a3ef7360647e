//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::ContentError;
use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|e| {
            ContentError::InvalidDataFormat(format!(
                "failed to parse config TOML '{}': {e}",
                path.display()
            ))
        })
    }

    /// Like [`ConfigLoader::load`], but an absent file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        match Self::load(path) {
            Err(ContentError::MissingDataFile { .. }) => Ok(GameConfig::default()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "revive_cost = 75\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();

        assert_eq!(config.revive_cost, 75);
        assert_eq!(config.max_inventory_slots, 20);
        assert_eq!(config.sell_percent, 50);
    }

    #[test]
    fn absent_config_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(ContentError::MissingDataFile { .. })
        ));
        assert_eq!(
            ConfigLoader::load_or_default(&path).unwrap(),
            GameConfig::default()
        );
    }

    #[test]
    fn malformed_config_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "revive_cost = \"lots\"\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(ContentError::InvalidDataFormat(_))
        ));
    }
}
