//! Data-driven content definitions and loaders.
//!
//! This crate parses the quest and item definition files and the game
//! configuration:
//! - Quest definitions (`quests.txt`, `KEY: value` blocks)
//! - Item definitions (`items.txt`, `KEY: value` blocks)
//! - Game configuration (`config.toml`)
//!
//! Definitions are static. Which quests a character has taken and which items
//! it carries live on the character record, by identifier.

pub mod definitions;
mod error;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use definitions::{
    ItemCatalog, ItemDefinition, ItemEffect, ItemStat, ItemType, QuestBook, QuestDefinition,
};
pub use error::ContentError;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, create_default_data_files};
