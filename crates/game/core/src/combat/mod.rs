//! Combat resolution.
//!
//! - [`damage`]: the basic attack formula shared by both sides
//! - [`enemy`]: enemy stat table and level tiers
//! - [`ability`]: class abilities for the special action
//! - [`battle`]: the turn-based state machine that ties them together

pub mod ability;
pub mod battle;
pub mod damage;
pub mod enemy;
mod error;

pub use ability::{
    Ability, AbilityBook, AbilityEffect, CriticalStrike, Fireball, HEAL_AMOUNT, Heal, PowerStrike,
};
pub use battle::{
    Battle, BattleEvent, BattleResult, BattleState, BattleView, PlayerAction, TurnReport, Winner,
};
pub use damage::{apply_damage, calculate_damage};
pub use enemy::{Enemy, EnemyKind};
pub use error::CombatError;
