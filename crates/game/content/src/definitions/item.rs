//! Item definitions.

use std::collections::BTreeMap;

use super::{index_by_id, parse_blocks};
use crate::ContentError;

const KIND: &str = "item";

/// Item category. Decides how an item can be used.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ItemType {
    /// Equipped for a permanent stat bonus.
    Weapon,
    /// Equipped for a permanent stat bonus.
    Armor,
    /// Used up for a one-time effect.
    Consumable,
}

/// Character stat an item effect changes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ItemStat {
    Health,
    Strength,
    Magic,
    MaxHealth,
}

/// `stat:value` effect, e.g. `health:20`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemEffect {
    pub stat: ItemStat,
    pub value: u32,
}

impl core::str::FromStr for ItemEffect {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ContentError::InvalidDataFormat(format!("invalid item effect '{s}'"));

        let (stat, value) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            stat: stat.trim().parse().map_err(|_| invalid())?,
            value: value.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl core::fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.stat, self.value)
    }
}

/// An item as defined in `items.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    pub effect: ItemEffect,
    pub cost: u32,
    pub description: String,
}

/// All items, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemDefinition>,
}

impl ItemCatalog {
    /// Parses item blocks.
    ///
    /// Required keys: `ITEM_ID`, `NAME`, `TYPE`, `EFFECT`, `COST`,
    /// `DESCRIPTION`.
    pub fn parse(text: &str) -> Result<Self, ContentError> {
        let definitions = parse_blocks(KIND, text)?
            .into_iter()
            .map(|block| {
                let item_type = block.require(KIND, "type")?;
                let item = ItemDefinition {
                    id: block.require(KIND, "item_id")?.to_string(),
                    name: block.require(KIND, "name")?.to_string(),
                    item_type: item_type.parse().map_err(|_| {
                        ContentError::InvalidDataFormat(format!("invalid item type: {item_type}"))
                    })?,
                    effect: block.require(KIND, "effect")?.parse()?,
                    cost: block.integer(KIND, "cost")?,
                    description: block.require(KIND, "description")?.to_string(),
                };
                Ok((item.id.clone(), item))
            })
            .collect::<Result<Vec<_>, ContentError>>()?;

        Ok(Self {
            items: index_by_id(KIND, definitions)?,
        })
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, ContentError> {
        let items = index_by_id(
            KIND,
            definitions.into_iter().map(|item| (item.id.clone(), item)),
        )?;
        Ok(Self { items })
    }

    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
