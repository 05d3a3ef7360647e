//! Quest log: accepting, completing and abandoning quests.
//!
//! Quest state lives on the character as two id lists. A quest id is in at
//! most one of them.

use game_content::{QuestBook, QuestDefinition};
use game_core::{Character, CharacterError, ErrorCategory, GameError};

/// Errors raised by quest log operations. State is unchanged on error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("quest '{0}' not found")]
    QuestNotFound(String),

    #[error("quest '{0}' is already completed")]
    QuestAlreadyCompleted(String),

    #[error("quest '{0}' is already active")]
    QuestAlreadyActive(String),

    #[error("quest '{quest}' requires level {required} (current level {level})")]
    InsufficientLevel {
        quest: String,
        required: u32,
        level: u32,
    },

    #[error("quest '{quest}' requires completing '{prerequisite}' first")]
    QuestRequirementsNotMet { quest: String, prerequisite: String },

    #[error("quest '{0}' is not active")]
    QuestNotActive(String),

    #[error(transparent)]
    Character(#[from] CharacterError),
}

impl GameError for QuestError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::QuestNotFound(_) => ErrorCategory::NotFound,
            Self::QuestAlreadyCompleted(_)
            | Self::QuestAlreadyActive(_)
            | Self::InsufficientLevel { .. }
            | Self::QuestRequirementsNotMet { .. }
            | Self::QuestNotActive(_) => ErrorCategory::State,
            Self::Character(error) => error.category(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::QuestNotFound(_) => "QUEST_NOT_FOUND",
            Self::QuestAlreadyCompleted(_) => "QUEST_ALREADY_COMPLETED",
            Self::QuestAlreadyActive(_) => "QUEST_ALREADY_ACTIVE",
            Self::InsufficientLevel { .. } => "QUEST_INSUFFICIENT_LEVEL",
            Self::QuestRequirementsNotMet { .. } => "QUEST_REQUIREMENTS_NOT_MET",
            Self::QuestNotActive(_) => "QUEST_NOT_ACTIVE",
            Self::Character(error) => error.error_code(),
        }
    }
}

/// Rewards paid out for a completed quest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestReward {
    pub xp: u32,
    pub gold: u32,
    pub levels_gained: u32,
}

fn find<'a>(quests: &'a QuestBook, id: &str) -> Result<&'a QuestDefinition, QuestError> {
    quests
        .get(id)
        .ok_or_else(|| QuestError::QuestNotFound(id.to_string()))
}

fn has(list: &[String], id: &str) -> bool {
    list.iter().any(|entry| entry == id)
}

/// Checks whether `character` may accept `quest` right now.
pub fn can_accept(character: &Character, quest: &QuestDefinition) -> Result<(), QuestError> {
    if has(&character.completed_quests, &quest.id) {
        return Err(QuestError::QuestAlreadyCompleted(quest.id.clone()));
    }
    if has(&character.active_quests, &quest.id) {
        return Err(QuestError::QuestAlreadyActive(quest.id.clone()));
    }
    if character.level < quest.required_level {
        return Err(QuestError::InsufficientLevel {
            quest: quest.id.clone(),
            required: quest.required_level,
            level: character.level,
        });
    }
    if let Some(prerequisite) = &quest.prerequisite
        && !has(&character.completed_quests, prerequisite)
    {
        return Err(QuestError::QuestRequirementsNotMet {
            quest: quest.id.clone(),
            prerequisite: prerequisite.clone(),
        });
    }
    Ok(())
}

/// Adds a quest to the character's active list.
pub fn accept_quest<'a>(
    character: &mut Character,
    quests: &'a QuestBook,
    id: &str,
) -> Result<&'a QuestDefinition, QuestError> {
    let quest = find(quests, id)?;
    can_accept(character, quest)?;

    character.active_quests.push(quest.id.clone());
    tracing::info!("{} accepted quest '{}'", character.name, quest.id);
    Ok(quest)
}

/// Completes an active quest and pays its rewards.
///
/// Gold is paid through [`Character::add_gold`] and experience through
/// [`Character::gain_experience`], so a reward can trigger level-ups.
pub fn complete_quest(
    character: &mut Character,
    quests: &QuestBook,
    id: &str,
) -> Result<QuestReward, QuestError> {
    let quest = find(quests, id)?;
    let Some(position) = character.active_quests.iter().position(|entry| entry == id) else {
        return Err(QuestError::QuestNotActive(id.to_string()));
    };
    if character.is_dead() {
        return Err(CharacterError::CharacterDead {
            name: character.name.clone(),
        }
        .into());
    }

    character.add_gold(i64::from(quest.reward_gold))?;
    let levels_gained = character.gain_experience(quest.reward_xp)?;
    character.active_quests.remove(position);
    character.completed_quests.push(quest.id.clone());

    tracing::info!(
        "{} completed quest '{}' (+{} xp, +{} gold)",
        character.name,
        quest.id,
        quest.reward_xp,
        quest.reward_gold
    );

    Ok(QuestReward {
        xp: quest.reward_xp,
        gold: quest.reward_gold,
        levels_gained,
    })
}

/// Drops an active quest without rewards.
pub fn abandon_quest(character: &mut Character, id: &str) -> Result<(), QuestError> {
    let Some(position) = character.active_quests.iter().position(|entry| entry == id) else {
        return Err(QuestError::QuestNotActive(id.to_string()));
    };
    character.active_quests.remove(position);
    tracing::info!("{} abandoned quest '{}'", character.name, id);
    Ok(())
}

/// Quests the character could accept now, in id order.
pub fn available_quests<'a>(
    character: &Character,
    quests: &'a QuestBook,
) -> Vec<&'a QuestDefinition> {
    quests
        .iter()
        .filter(|quest| can_accept(character, quest).is_ok())
        .collect()
}

/// Active quests that still have a definition, in acceptance order.
pub fn active_quests<'a>(character: &Character, quests: &'a QuestBook) -> Vec<&'a QuestDefinition> {
    character
        .active_quests
        .iter()
        .filter_map(|id| quests.get(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CharacterClass;

    fn quest(id: &str, level: u32, prerequisite: Option<&str>) -> QuestDefinition {
        QuestDefinition {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            reward_xp: 150,
            reward_gold: 40,
            required_level: level,
            prerequisite: prerequisite.map(String::from),
        }
    }

    fn book() -> QuestBook {
        QuestBook::from_definitions([
            quest("first_quest", 1, None),
            quest("second_quest", 1, Some("first_quest")),
            quest("veteran_quest", 5, None),
        ])
        .unwrap()
    }

    fn hero() -> Character {
        Character::new("Hero", CharacterClass::Warrior)
    }

    #[test]
    fn accept_and_complete_pays_rewards() {
        let quests = book();
        let mut hero = hero();

        accept_quest(&mut hero, &quests, "first_quest").unwrap();
        assert_eq!(hero.active_quests, ["first_quest"]);

        let reward = complete_quest(&mut hero, &quests, "first_quest").unwrap();

        assert_eq!(reward.levels_gained, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 50);
        assert_eq!(hero.gold, 140);
        assert!(hero.active_quests.is_empty());
        assert_eq!(hero.completed_quests, ["first_quest"]);
    }

    #[test]
    fn accept_checks_in_order() {
        let quests = book();
        let mut hero = hero();

        assert_eq!(
            accept_quest(&mut hero, &quests, "nope").unwrap_err(),
            QuestError::QuestNotFound("nope".into())
        );
        assert!(matches!(
            accept_quest(&mut hero, &quests, "veteran_quest"),
            Err(QuestError::InsufficientLevel {
                required: 5,
                level: 1,
                ..
            })
        ));
        assert!(matches!(
            accept_quest(&mut hero, &quests, "second_quest"),
            Err(QuestError::QuestRequirementsNotMet { .. })
        ));

        accept_quest(&mut hero, &quests, "first_quest").unwrap();
        assert_eq!(
            accept_quest(&mut hero, &quests, "first_quest").unwrap_err(),
            QuestError::QuestAlreadyActive("first_quest".into())
        );

        complete_quest(&mut hero, &quests, "first_quest").unwrap();
        assert_eq!(
            accept_quest(&mut hero, &quests, "first_quest").unwrap_err(),
            QuestError::QuestAlreadyCompleted("first_quest".into())
        );
        accept_quest(&mut hero, &quests, "second_quest").unwrap();
    }

    #[test]
    fn completing_inactive_quest_fails() {
        let quests = book();
        let mut hero = hero();

        assert_eq!(
            complete_quest(&mut hero, &quests, "first_quest").unwrap_err(),
            QuestError::QuestNotActive("first_quest".into())
        );
        assert_eq!(
            abandon_quest(&mut hero, "first_quest").unwrap_err(),
            QuestError::QuestNotActive("first_quest".into())
        );
    }

    #[test]
    fn dead_character_cannot_complete() {
        let quests = book();
        let mut hero = hero();
        accept_quest(&mut hero, &quests, "first_quest").unwrap();
        hero.health = 0;
        let before = hero.clone();

        let err = complete_quest(&mut hero, &quests, "first_quest").unwrap_err();

        assert_eq!(err.category(), ErrorCategory::State);
        assert_eq!(hero, before);
    }

    #[test]
    fn abandon_removes_quest() {
        let quests = book();
        let mut hero = hero();
        accept_quest(&mut hero, &quests, "first_quest").unwrap();

        abandon_quest(&mut hero, "first_quest").unwrap();

        assert!(hero.active_quests.is_empty());
        assert!(hero.completed_quests.is_empty());
    }

    #[test]
    fn available_lists_acceptable_quests() {
        let quests = book();
        let mut hero = hero();

        let ids = |hero: &Character| {
            available_quests(hero, &quests)
                .into_iter()
                .map(|quest| quest.id.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(&hero), ["first_quest"]);
        accept_quest(&mut hero, &quests, "first_quest").unwrap();
        assert!(ids(&hero).is_empty());
        complete_quest(&mut hero, &quests, "first_quest").unwrap();
        assert_eq!(ids(&hero), ["second_quest"]);
        assert_eq!(active_quests(&hero, &quests).len(), 0);
    }
}
