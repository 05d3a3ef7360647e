//! Quest definitions.

use std::collections::BTreeMap;

use super::{index_by_id, parse_blocks};
use crate::ContentError;

const KIND: &str = "quest";

/// Prerequisite value meaning "no prerequisite".
pub const NO_PREREQUISITE: &str = "NONE";

/// A quest as defined in `quests.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub required_level: u32,
    /// Quest that must be completed first.
    pub prerequisite: Option<String>,
}

/// All quests, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestBook {
    quests: BTreeMap<String, QuestDefinition>,
}

impl QuestBook {
    /// Parses quest blocks.
    ///
    /// Required keys: `QUEST_ID`, `TITLE`, `DESCRIPTION`, `REWARD_XP`,
    /// `REWARD_GOLD`, `REQUIRED_LEVEL`, `PREREQUISITE`.
    pub fn parse(text: &str) -> Result<Self, ContentError> {
        let definitions = parse_blocks(KIND, text)?
            .into_iter()
            .map(|block| {
                let prerequisite = block.require(KIND, "prerequisite")?;
                let quest = QuestDefinition {
                    id: block.require(KIND, "quest_id")?.to_string(),
                    title: block.require(KIND, "title")?.to_string(),
                    description: block.require(KIND, "description")?.to_string(),
                    reward_xp: block.integer(KIND, "reward_xp")?,
                    reward_gold: block.integer(KIND, "reward_gold")?,
                    required_level: block.integer(KIND, "required_level")?,
                    prerequisite: (!prerequisite.eq_ignore_ascii_case(NO_PREREQUISITE))
                        .then(|| prerequisite.to_string()),
                };
                Ok((quest.id.clone(), quest))
            })
            .collect::<Result<Vec<_>, ContentError>>()?;

        Ok(Self {
            quests: index_by_id(KIND, definitions)?,
        })
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = QuestDefinition>,
    ) -> Result<Self, ContentError> {
        let quests = index_by_id(
            KIND,
            definitions
                .into_iter()
                .map(|quest| (quest.id.clone(), quest)),
        )?;
        Ok(Self { quests })
    }

    pub fn get(&self, id: &str) -> Option<&QuestDefinition> {
        self.quests.get(id)
    }

    /// Quests in id order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestDefinition> {
        self.quests.values()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTS: &str = "\
QUEST_ID: first_quest
TITLE: The Beginning
DESCRIPTION: Your first quest to get started.
REWARD_XP: 100
REWARD_GOLD: 50
REQUIRED_LEVEL: 1
PREREQUISITE: NONE

QUEST_ID: goblin_cave
TITLE: Goblin Cave
DESCRIPTION: Clear the cave: all of it.
REWARD_XP: 250
REWARD_GOLD: 80
REQUIRED_LEVEL: 2
PREREQUISITE: first_quest
";

    #[test]
    fn parses_quest_blocks() {
        let book = QuestBook::parse(QUESTS).unwrap();

        assert_eq!(book.len(), 2);
        let first = book.get("first_quest").unwrap();
        assert_eq!(first.title, "The Beginning");
        assert_eq!(first.reward_xp, 100);
        assert_eq!(first.prerequisite, None);

        let cave = book.get("goblin_cave").unwrap();
        assert_eq!(cave.description, "Clear the cave: all of it.");
        assert_eq!(cave.required_level, 2);
        assert_eq!(cave.prerequisite.as_deref(), Some("first_quest"));
    }

    #[test]
    fn missing_field_is_invalid() {
        let text = QUESTS.replace("TITLE: Goblin Cave\n", "");
        let err = QuestBook::parse(&text).unwrap_err();
        assert!(err.to_string().contains("missing required field 'title'"));
    }

    #[test]
    fn non_integer_reward_is_invalid() {
        let text = QUESTS.replace("REWARD_GOLD: 50", "REWARD_GOLD: fifty");
        assert!(matches!(
            QuestBook::parse(&text),
            Err(ContentError::InvalidDataFormat(_))
        ));
    }

    #[test]
    fn duplicate_quest_id_is_invalid() {
        let text = format!("{QUESTS}\n{QUESTS}");
        assert!(matches!(
            QuestBook::parse(&text),
            Err(ContentError::InvalidDataFormat(_))
        ));
    }
}
