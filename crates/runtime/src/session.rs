//! Session context: one loaded character plus everything it plays against.
//!
//! The session replaces process-wide state. The client owns it, passes it to
//! every menu action and drops it on exit.

use game_content::{ItemCatalog, ItemEffect, QuestBook, QuestDefinition};
use game_core::{Battle, BattleResult, Character, Enemy, GameConfig, PcgRng, RngOracle};

use crate::api::{ActionProvider, Result, SessionError};
use crate::battle::run_battle;
use crate::quests::{self, QuestReward};
use crate::repository::{CharacterRepository, RepositoryError};
use crate::shop;

/// What happened when the character went exploring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploreOutcome {
    pub enemy: String,
    pub result: BattleResult,
    pub levels_gained: u32,
}

pub struct Session {
    character: Character,
    quests: QuestBook,
    items: ItemCatalog,
    config: GameConfig,
    repository: Box<dyn CharacterRepository>,
    rng: Box<dyn RngOracle>,
    seed: u64,
    battles_fought: u64,
}

impl Session {
    /// Starts a session for `character` with no quests or items defined.
    pub fn new(character: Character, repository: Box<dyn CharacterRepository>) -> Self {
        Self {
            character,
            quests: QuestBook::default(),
            items: ItemCatalog::default(),
            config: GameConfig::default(),
            repository,
            rng: Box::new(PcgRng),
            seed: 0,
            battles_fought: 0,
        }
    }

    /// Loads a saved character and starts a session for it.
    pub fn load(
        name: &str,
        repository: Box<dyn CharacterRepository>,
    ) -> std::result::Result<Self, RepositoryError> {
        let character = repository.load(name)?;
        tracing::info!("Loaded character '{}'", character.name);
        Ok(Self::new(character, repository))
    }

    pub fn with_quests(mut self, quests: QuestBook) -> Self {
        self.quests = quests;
        self
    }

    pub fn with_items(mut self, items: ItemCatalog) -> Self {
        self.items = items;
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Base seed for battle chance rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn quests(&self) -> &QuestBook {
        &self.quests
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fights an enemy from the character's level tier and applies rewards.
    ///
    /// Gold is paid before experience. A lost battle leaves the character
    /// dead; see [`Session::revive_for_gold`].
    pub fn explore(&mut self, provider: &mut dyn ActionProvider) -> Result<ExploreOutcome> {
        let enemy = Enemy::for_level(self.character.level);
        let enemy_name = enemy.name.clone();
        let seed = self.seed.wrapping_add(self.battles_fought);

        let mut battle = Battle::new(&mut self.character, enemy, seed)?;
        let result = run_battle(&mut battle, provider, self.rng.as_ref())?;
        drop(battle);
        self.battles_fought += 1;

        let mut levels_gained = 0;
        if result.gold_gained > 0 {
            self.character.add_gold(i64::from(result.gold_gained))?;
        }
        if result.xp_gained > 0 {
            levels_gained = self.character.gain_experience(result.xp_gained)?;
        }
        if levels_gained > 0 {
            tracing::info!(
                "{} reached level {}",
                self.character.name,
                self.character.level
            );
        }

        Ok(ExploreOutcome {
            enemy: enemy_name,
            result,
            levels_gained,
        })
    }

    /// Pays the revive cost and brings a dead character back at half health.
    ///
    /// Returns the gold left.
    pub fn revive_for_gold(&mut self) -> Result<u32> {
        if !self.character.is_dead() {
            return Err(SessionError::NotDead {
                name: self.character.name.clone(),
            });
        }

        let gold = self
            .character
            .add_gold(-i64::from(self.config.revive_cost))?;
        self.character.revive();

        tracing::info!(
            "{} revived for {} gold",
            self.character.name,
            self.config.revive_cost
        );
        Ok(gold)
    }

    /// Writes the character to the repository.
    pub fn save(&self) -> std::result::Result<(), RepositoryError> {
        self.repository.save(&self.character)?;
        tracing::info!("Saved character '{}'", self.character.name);
        Ok(())
    }

    pub fn accept_quest(&mut self, id: &str) -> Result<&QuestDefinition> {
        Ok(quests::accept_quest(&mut self.character, &self.quests, id)?)
    }

    pub fn complete_quest(&mut self, id: &str) -> Result<QuestReward> {
        Ok(quests::complete_quest(&mut self.character, &self.quests, id)?)
    }

    pub fn abandon_quest(&mut self, id: &str) -> Result<()> {
        Ok(quests::abandon_quest(&mut self.character, id)?)
    }

    pub fn available_quests(&self) -> Vec<&QuestDefinition> {
        quests::available_quests(&self.character, &self.quests)
    }

    pub fn active_quests(&self) -> Vec<&QuestDefinition> {
        quests::active_quests(&self.character, &self.quests)
    }

    pub fn buy_item(&mut self, id: &str) -> Result<u32> {
        Ok(shop::buy_item(
            &mut self.character,
            &self.items,
            id,
            &self.config,
        )?)
    }

    pub fn sell_item(&mut self, id: &str) -> Result<u32> {
        Ok(shop::sell_item(
            &mut self.character,
            &self.items,
            id,
            &self.config,
        )?)
    }

    pub fn use_item(&mut self, id: &str) -> Result<ItemEffect> {
        Ok(shop::use_item(&mut self.character, &self.items, id)?)
    }

    pub fn equip_item(&mut self, id: &str) -> Result<ItemEffect> {
        Ok(shop::equip_item(&mut self.character, &self.items, id)?)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("character", &self.character.name)
            .field("quests", &self.quests.len())
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("battles_fought", &self.battles_fought)
            .finish_non_exhaustive()
    }
}
