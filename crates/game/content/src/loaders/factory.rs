//! Content factory for loading definitions from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::definitions::{ItemCatalog, QuestBook};
use crate::loaders::defaults::{CONFIG_FILE, ITEMS_FILE, QUESTS_FILE};
use crate::loaders::{ConfigLoader, LoadResult, create_default_data_files, read_file};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── quests.txt
/// └── items.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join(CONFIG_FILE))
    }

    /// Load quest definitions from `quests.txt`.
    pub fn load_quests(&self) -> LoadResult<QuestBook> {
        QuestBook::parse(&read_file(&self.data_dir.join(QUESTS_FILE))?)
    }

    /// Load item definitions from `items.txt`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemCatalog::parse(&read_file(&self.data_dir.join(ITEMS_FILE))?)
    }

    /// Writes the starter definition files that are missing.
    pub fn create_default_data_files(&self) -> LoadResult<Vec<PathBuf>> {
        create_default_data_files(&self.data_dir)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
