//! Session orchestration for the quest game.
//!
//! This crate wires the pure rules in `game-core` and the definitions in
//! `game-content` to persistence and player input. Clients build a
//! [`Session`] around a character and call its operations from their menus.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session context
//! - [`api`] exposes the error type and the action provider seam
//! - [`battle`] drives a battle to completion
//! - [`quests`] and [`shop`] mutate the character's quest log and inventory
//! - [`repository`] persists character records
pub mod api;
pub mod battle;
pub mod quests;
pub mod repository;
pub mod session;
pub mod shop;

pub use api::{
    ActionProvider, BasicAttackProvider, Result, ScriptedActionProvider, SessionError,
};
pub use battle::run_battle;
pub use quests::{QuestError, QuestReward};
pub use repository::{
    CharacterRepository, FileCharacterRepository, InMemoryCharacterRepository, RepositoryError,
};
pub use session::{ExploreOutcome, Session};
pub use shop::InventoryError;
