//! Save record codec.
//!
//! A save record is one `KEY: value` line per character field, in a fixed
//! order:
//!
//! ```text
//! NAME: Aria
//! CLASS: Mage
//! LEVEL: 3
//! HEALTH: 75
//! MAX_HEALTH: 100
//! STRENGTH: 12
//! MAGIC: 24
//! EXPERIENCE: 40
//! GOLD: 130
//! INVENTORY: health_potion,iron_sword
//! ACTIVE_QUESTS: goblin_camp
//! COMPLETED_QUESTS: first_quest
//! ```
//!
//! List values are joined with `,` and are not escaped, so an identifier that
//! contains a comma does not survive a round trip. There is no version field.
//!
//! Decoding happens in two steps: [`SaveRecord::parse`] splits lines into a raw
//! key/value map, then [`SaveRecord::validate`] and the conversion into
//! [`Character`] coerce every field to its real type. Callers never see a
//! half-typed record.

mod error;

pub use error::CodecError;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::character::{Character, CharacterClass};

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: &str = ": ";
/// Separator between list items.
pub const LIST_SEPARATOR: char = ',';

/// Fields of a save record, in the order they are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SaveField {
    Name,
    Class,
    Level,
    Health,
    MaxHealth,
    Strength,
    Magic,
    Experience,
    Gold,
    Inventory,
    ActiveQuests,
    CompletedQuests,
}

impl SaveField {
    pub const ALL: [Self; 12] = [
        Self::Name,
        Self::Class,
        Self::Level,
        Self::Health,
        Self::MaxHealth,
        Self::Strength,
        Self::Magic,
        Self::Experience,
        Self::Gold,
        Self::Inventory,
        Self::ActiveQuests,
        Self::CompletedQuests,
    ];

    /// Upper-case key as written to disk.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Lower-case key as stored in a parsed [`SaveRecord`].
    pub fn record_key(self) -> String {
        self.key().to_ascii_lowercase()
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Level
                | Self::Health
                | Self::MaxHealth
                | Self::Strength
                | Self::Magic
                | Self::Experience
                | Self::Gold
        )
    }

    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::Inventory | Self::ActiveQuests | Self::CompletedQuests
        )
    }
}

/// Encodes a character as a save record.
pub fn encode(character: &Character) -> String {
    let mut out = String::new();
    for field in SaveField::ALL {
        let _ = writeln!(
            out,
            "{}{}{}",
            field.key(),
            KEY_VALUE_SEPARATOR,
            field_value(character, field)
        );
    }
    out
}

fn field_value(character: &Character, field: SaveField) -> String {
    match field {
        SaveField::Name => character.name.clone(),
        SaveField::Class => character.class.to_string(),
        SaveField::Level => character.level.to_string(),
        SaveField::Health => character.health.to_string(),
        SaveField::MaxHealth => character.max_health.to_string(),
        SaveField::Strength => character.strength.to_string(),
        SaveField::Magic => character.magic.to_string(),
        SaveField::Experience => character.experience.to_string(),
        SaveField::Gold => character.gold.to_string(),
        SaveField::Inventory => join_list(&character.inventory),
        SaveField::ActiveQuests => join_list(&character.active_quests),
        SaveField::CompletedQuests => join_list(&character.completed_quests),
    }
}

fn join_list(items: &[String]) -> String {
    items.join(&LIST_SEPARATOR.to_string())
}

/// Splits a list value; the empty string is the empty list.
pub fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Decodes a save record into a fully typed character.
pub fn decode(text: &str) -> Result<Character, CodecError> {
    let record = SaveRecord::parse(text)?;
    record.validate()?;
    record.into_character()
}

/// Raw key/value view of a save record, before type coercion.
///
/// Keys are lower-cased; values are kept exactly as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveRecord {
    fields: BTreeMap<String, String>,
}

impl SaveRecord {
    /// Splits each line on its first `": "`.
    ///
    /// Fails with [`CodecError::SaveFileCorrupted`] on the first line that has
    /// no separator. A later line with the same key replaces an earlier one.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let mut fields = BTreeMap::new();

        for (index, line) in text.lines().enumerate() {
            let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
                return Err(CodecError::SaveFileCorrupted {
                    line: index + 1,
                    content: line.to_string(),
                });
            };
            fields.insert(key.trim().to_ascii_lowercase(), value.to_string());
        }

        Ok(Self { fields })
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: SaveField) -> Option<&str> {
        self.fields.get(&field.record_key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks that every field is present and has the right shape.
    ///
    /// Integer fields must parse as non-negative integers and the class must
    /// be a playable class. List fields accept any text.
    pub fn validate(&self) -> Result<(), CodecError> {
        for field in SaveField::ALL {
            let value = self.require(field)?;

            if field.is_integer() {
                parse_integer(field, value)?;
            }
        }

        parse_class(self.require(SaveField::Class)?)?;
        Ok(())
    }

    /// Converts the record into a character, coercing every field.
    pub fn into_character(self) -> Result<Character, CodecError> {
        let integer = |field: SaveField| {
            self.require(field)
                .and_then(|value| parse_integer(field, value))
        };
        let list = |field: SaveField| self.require(field).map(split_list);

        let character = Character {
            name: self.require(SaveField::Name)?.to_string(),
            class: parse_class(self.require(SaveField::Class)?)?,
            level: integer(SaveField::Level)?,
            health: integer(SaveField::Health)?,
            max_health: integer(SaveField::MaxHealth)?,
            strength: integer(SaveField::Strength)?,
            magic: integer(SaveField::Magic)?,
            experience: integer(SaveField::Experience)?,
            gold: integer(SaveField::Gold)?,
            inventory: list(SaveField::Inventory)?,
            active_quests: list(SaveField::ActiveQuests)?,
            completed_quests: list(SaveField::CompletedQuests)?,
        };

        check_invariants(&character)?;
        Ok(character)
    }

    fn require(&self, field: SaveField) -> Result<&str, CodecError> {
        self.get(field)
            .ok_or_else(|| CodecError::InvalidSaveData(format!("missing field {}", field.key())))
    }
}

fn parse_integer(field: SaveField, value: &str) -> Result<u32, CodecError> {
    value.trim().parse::<u32>().map_err(|_| {
        CodecError::InvalidSaveData(format!(
            "field {} must be a non-negative integer, got {value:?}",
            field.key()
        ))
    })
}

fn parse_class(value: &str) -> Result<CharacterClass, CodecError> {
    value
        .trim()
        .parse::<CharacterClass>()
        .map_err(|_| CodecError::InvalidSaveData(format!("unknown class {value:?}")))
}

fn check_invariants(character: &Character) -> Result<(), CodecError> {
    if character.level == 0 {
        return Err(CodecError::InvalidSaveData("level must be at least 1".into()));
    }
    if character.max_health == 0 {
        return Err(CodecError::InvalidSaveData(
            "max health must be positive".into(),
        ));
    }
    if character.health > character.max_health {
        return Err(CodecError::InvalidSaveData(format!(
            "health {} exceeds max health {}",
            character.health, character.max_health
        )));
    }
    Ok(())
}
