//! Rules of the quest game, free of I/O.
//!
//! `game-core` defines the character record and its progression rules, the
//! save record codec, enemies and the turn-based battle. Persistence, content
//! files and the interactive session live in other crates and depend on the
//! types re-exported here.
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod rng;
pub mod save;

pub use character::{BaseStats, Character, CharacterClass, CharacterError};
pub use combat::{
    Ability, AbilityBook, AbilityEffect, Battle, BattleEvent, BattleResult, BattleState,
    BattleView, CombatError, Enemy, EnemyKind, PlayerAction, TurnReport, Winner,
};
pub use config::GameConfig;
pub use error::{ErrorCategory, GameError};
pub use rng::{PcgRng, RngOracle, RollKind, RoundRoller, compute_seed};
pub use save::{CodecError, SaveField, SaveRecord, decode, encode};
