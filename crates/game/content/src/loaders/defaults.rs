//! Starter data files.

use std::path::{Path, PathBuf};

use crate::ContentError;
use crate::loaders::LoadResult;

pub const QUESTS_FILE: &str = "quests.txt";
pub const ITEMS_FILE: &str = "items.txt";
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_QUESTS: &str = "\
QUEST_ID: first_quest
TITLE: The Beginning
DESCRIPTION: Your first quest to get started.
REWARD_XP: 100
REWARD_GOLD: 50
REQUIRED_LEVEL: 1
PREREQUISITE: NONE
";

const DEFAULT_ITEMS: &str = "\
ITEM_ID: health_potion
NAME: Health Potion
TYPE: consumable
EFFECT: health:20
COST: 10
DESCRIPTION: Restores 20 health points.
";

/// Writes starter `quests.txt` and `items.txt` into `data_dir`.
///
/// Existing files are left alone. Returns the paths that were written.
pub fn create_default_data_files(data_dir: &Path) -> LoadResult<Vec<PathBuf>> {
    std::fs::create_dir_all(data_dir).map_err(|source| ContentError::WriteFailed {
        path: data_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for (name, content) in [(QUESTS_FILE, DEFAULT_QUESTS), (ITEMS_FILE, DEFAULT_ITEMS)] {
        let path = data_dir.join(name);
        if path.exists() {
            continue;
        }
        std::fs::write(&path, content).map_err(|source| ContentError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemCatalog, QuestBook};
    use tempfile::TempDir;

    #[test]
    fn writes_only_missing_files() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join(QUESTS_FILE), "custom").unwrap();

        let written = create_default_data_files(&data_dir).unwrap();

        assert_eq!(written, vec![data_dir.join(ITEMS_FILE)]);
        assert_eq!(
            std::fs::read_to_string(data_dir.join(QUESTS_FILE)).unwrap(),
            "custom"
        );
        assert!(create_default_data_files(&data_dir).unwrap().is_empty());
    }

    #[test]
    fn defaults_parse() {
        let quests = QuestBook::parse(DEFAULT_QUESTS).unwrap();
        assert!(quests.get("first_quest").is_some());

        let items = ItemCatalog::parse(DEFAULT_ITEMS).unwrap();
        assert_eq!(items.get("health_potion").unwrap().cost, 10);
    }
}
