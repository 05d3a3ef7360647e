//! Definition file parsing.
//!
//! Both definition files hold blocks of `KEY: value` lines separated by blank
//! lines. Keys are matched case-insensitively and surrounding whitespace is
//! ignored. Each block becomes one definition, indexed by its identifier.

mod item;
mod quest;

pub use item::{ItemCatalog, ItemDefinition, ItemEffect, ItemStat, ItemType};
pub use quest::{QuestBook, QuestDefinition};

use std::collections::BTreeMap;

use crate::ContentError;

const KEY_VALUE_SEPARATOR: &str = ": ";

/// One `KEY: value` block, keys lowercased.
#[derive(Clone, Debug, Default)]
pub(crate) struct Block {
    /// 1-based position of the block in its file.
    number: usize,
    fields: BTreeMap<String, String>,
}

impl Block {
    fn require(&self, kind: &str, key: &str) -> Result<&str, ContentError> {
        self.fields.get(key).map(String::as_str).ok_or_else(|| {
            ContentError::InvalidDataFormat(format!(
                "{kind} block {}: missing required field '{key}'",
                self.number
            ))
        })
    }

    fn integer(&self, kind: &str, key: &str) -> Result<u32, ContentError> {
        let value = self.require(kind, key)?;
        value.parse().map_err(|_| {
            ContentError::InvalidDataFormat(format!(
                "{kind} block {}: expected integer for '{key}', got '{value}'",
                self.number
            ))
        })
    }
}

/// Splits `text` into blocks.
///
/// `kind` names the definition type in error messages.
pub(crate) fn parse_blocks(kind: &str, text: &str) -> Result<Vec<Block>, ContentError> {
    let mut blocks = Vec::new();
    let mut current = Block::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.fields.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        if current.fields.is_empty() {
            current.number = blocks.len() + 1;
        }

        let (key, value) = line.split_once(KEY_VALUE_SEPARATOR).ok_or_else(|| {
            ContentError::InvalidDataFormat(format!(
                "invalid {kind} line format: {:?}",
                line.trim()
            ))
        })?;
        current
            .fields
            .insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    if !current.fields.is_empty() {
        blocks.push(current);
    }

    Ok(blocks)
}

/// Indexes parsed definitions by id, rejecting duplicates.
fn index_by_id<T>(
    kind: &str,
    definitions: impl IntoIterator<Item = (String, T)>,
) -> Result<BTreeMap<String, T>, ContentError> {
    let mut indexed = BTreeMap::new();
    for (id, definition) in definitions {
        if indexed.contains_key(&id) {
            return Err(ContentError::InvalidDataFormat(format!(
                "duplicate {kind} id '{id}'"
            )));
        }
        indexed.insert(id, definition);
    }
    Ok(indexed)
}
