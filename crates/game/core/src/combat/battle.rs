//! Turn-based battle state machine.
//!
//! A [`Battle`] borrows the character mutably for its whole lifetime and owns
//! its enemy. Every call to [`Battle::advance`] plays one round and returns the
//! state the battle is in afterwards. Rewards are computed once, from the
//! terminal state, by [`Battle::result`]; applying them to the character is
//! the caller's job.

use core::fmt;

use crate::character::Character;
use crate::rng::{RngOracle, RollKind, RoundRoller};

use super::ability::{AbilityBook, AbilityEffect};
use super::damage::{apply_damage, calculate_damage};
use super::enemy::Enemy;
use super::error::CombatError;

/// Battle state. Everything but `Active` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    Active,
    PlayerWon,
    EnemyWon,
    Escaped,
}

impl BattleState {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// What the player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    #[strum(to_string = "Basic Attack")]
    BasicAttack,
    #[strum(to_string = "Special Ability")]
    SpecialAbility,
    #[strum(to_string = "Try to Run")]
    Escape,
}

impl PlayerAction {
    pub const ALL: [Self; 3] = [Self::BasicAttack, Self::SpecialAbility, Self::Escape];
}

/// Side that won a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    #[strum(to_string = "player")]
    Player,
    #[strum(to_string = "enemy")]
    Enemy,
}

/// Outcome of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub state: BattleState,
    pub xp_gained: u32,
    pub gold_gained: u32,
}

impl BattleResult {
    /// `None` when the player escaped.
    pub fn winner(&self) -> Option<Winner> {
        match self.state {
            BattleState::PlayerWon => Some(Winner::Player),
            BattleState::EnemyWon => Some(Winner::Enemy),
            BattleState::Active | BattleState::Escaped => None,
        }
    }
}

/// Something that happened during a round, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttacked {
        target: String,
        damage: u32,
    },
    AbilityUsed {
        ability: &'static str,
        effect: AbilityEffect,
    },
    NoAbilityAvailable,
    EscapeSucceeded,
    EscapeFailed,
    EnemyAttacked {
        attacker: String,
        damage: u32,
    },
    EnemyDefeated {
        name: String,
    },
    PlayerDefeated,
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerAttacked { target, damage } => {
                write!(f, "You attack the {target} for {damage} damage!")
            }
            Self::AbilityUsed {
                ability,
                effect: AbilityEffect::Damage(damage),
            } => write!(f, "You use {ability} for {damage} damage!"),
            Self::AbilityUsed {
                ability,
                effect: AbilityEffect::Heal(amount),
            } => write!(f, "You cast {ability} and restore {amount} health!"),
            Self::AbilityUsed {
                ability,
                effect: AbilityEffect::Miss,
            } => write!(f, "Your {ability} misses!"),
            Self::NoAbilityAvailable => f.write_str("No special ability available!"),
            Self::EscapeSucceeded => f.write_str("You successfully escaped!"),
            Self::EscapeFailed => f.write_str("Couldn't escape!"),
            Self::EnemyAttacked { attacker, damage } => {
                write!(f, "The {attacker} attacks you for {damage} damage!")
            }
            Self::EnemyDefeated { name } => write!(f, "You defeated the {name}!"),
            Self::PlayerDefeated => f.write_str("You have been defeated!"),
        }
    }
}

/// Events of one round and the state the battle ended the round in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
}

/// Snapshot of both combatants, shown to the player before each turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleView {
    pub round: u32,
    pub character_name: String,
    pub character_health: u32,
    pub character_max_health: u32,
    pub enemy_name: String,
    pub enemy_health: u32,
    pub enemy_max_health: u32,
}

impl fmt::Display for BattleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Round {} ---", self.round + 1)?;
        writeln!(
            f,
            "{}: HP={}/{}",
            self.character_name, self.character_health, self.character_max_health
        )?;
        write!(
            f,
            "{}: HP={}/{}",
            self.enemy_name, self.enemy_health, self.enemy_max_health
        )
    }
}

/// One encounter between a character and an enemy.
///
/// # Invariants
///
/// - The character is alive while the state is `Active`
/// - `turn_counter` counts the rounds that ended with the battle still active
#[derive(Debug)]
pub struct Battle<'a> {
    character: &'a mut Character,
    enemy: Enemy,
    abilities: AbilityBook,
    seed: u64,
    state: BattleState,
    turn_counter: u32,
}

impl<'a> Battle<'a> {
    /// Starts a battle with the standard ability book.
    ///
    /// `seed` drives every chance roll of the battle.
    pub fn new(character: &'a mut Character, enemy: Enemy, seed: u64) -> Result<Self, CombatError> {
        if character.is_dead() {
            return Err(CombatError::CharacterDead {
                name: character.name.clone(),
            });
        }

        Ok(Self {
            character,
            enemy,
            abilities: AbilityBook::standard(),
            seed,
            state: BattleState::Active,
            turn_counter: 0,
        })
    }

    /// Replaces the ability book.
    pub fn with_abilities(mut self, abilities: AbilityBook) -> Self {
        self.abilities = abilities;
        self
    }

    #[inline]
    pub fn state(&self) -> BattleState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == BattleState::Active
    }

    #[inline]
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    pub fn character(&self) -> &Character {
        self.character
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn view(&self) -> BattleView {
        BattleView {
            round: self.turn_counter,
            character_name: self.character.name.clone(),
            character_health: self.character.health,
            character_max_health: self.character.max_health,
            enemy_name: self.enemy.name.clone(),
            enemy_health: self.enemy.health,
            enemy_max_health: self.enemy.max_health,
        }
    }

    /// Plays one round: the player's action, then the enemy's attack if the
    /// battle is still on.
    ///
    /// # Errors
    ///
    /// [`CombatError::CombatNotActive`] once the battle has reached a
    /// terminal state.
    pub fn advance(
        &mut self,
        action: PlayerAction,
        rng: &dyn RngOracle,
    ) -> Result<TurnReport, CombatError> {
        if !self.is_active() {
            return Err(CombatError::CombatNotActive);
        }

        let roller = RoundRoller::new(rng, self.seed, self.turn_counter);
        let mut events = Vec::new();

        match action {
            PlayerAction::BasicAttack => {
                let damage = calculate_damage(self.character.strength, self.enemy.strength);
                self.enemy.health = apply_damage(self.enemy.health, damage);
                events.push(BattleEvent::PlayerAttacked {
                    target: self.enemy.name.clone(),
                    damage,
                });
            }
            PlayerAction::SpecialAbility => events.push(self.use_ability(&roller)),
            PlayerAction::Escape => {
                if roller.coin_flip(RollKind::Escape) {
                    self.state = BattleState::Escaped;
                    events.push(BattleEvent::EscapeSucceeded);
                    return Ok(self.report(events));
                }
                events.push(BattleEvent::EscapeFailed);
            }
        }

        if let Some(event) = self.check_battle_end() {
            events.push(event);
            return Ok(self.report(events));
        }

        let damage = calculate_damage(self.enemy.strength, self.character.strength);
        self.character.health = apply_damage(self.character.health, damage);
        events.push(BattleEvent::EnemyAttacked {
            attacker: self.enemy.name.clone(),
            damage,
        });

        if let Some(event) = self.check_battle_end() {
            events.push(event);
            return Ok(self.report(events));
        }

        self.turn_counter += 1;
        Ok(self.report(events))
    }

    /// The battle's outcome, or `None` while it is still active.
    pub fn result(&self) -> Option<BattleResult> {
        let (xp_gained, gold_gained) = match self.state {
            BattleState::Active => return None,
            BattleState::PlayerWon => (self.enemy.xp_reward, self.enemy.gold_reward),
            BattleState::EnemyWon | BattleState::Escaped => (0, 0),
        };

        Some(BattleResult {
            state: self.state,
            xp_gained,
            gold_gained,
        })
    }

    fn use_ability(&mut self, roller: &RoundRoller<'_>) -> BattleEvent {
        let Some(ability) = self.abilities.for_class(self.character.class) else {
            return BattleEvent::NoAbilityAvailable;
        };

        let effect = ability.resolve(self.character, roller);
        match effect {
            AbilityEffect::Damage(damage) => {
                self.enemy.health = apply_damage(self.enemy.health, damage);
            }
            AbilityEffect::Heal(amount) => {
                self.character.health = self
                    .character
                    .health
                    .saturating_add(amount)
                    .min(self.character.max_health);
            }
            AbilityEffect::Miss => {}
        }

        BattleEvent::AbilityUsed {
            ability: ability.name(),
            effect,
        }
    }

    /// Moves to a terminal state if either side is down.
    ///
    /// Runs after every action that can deal damage, whatever its source.
    fn check_battle_end(&mut self) -> Option<BattleEvent> {
        if self.enemy.is_defeated() {
            self.state = BattleState::PlayerWon;
            return Some(BattleEvent::EnemyDefeated {
                name: self.enemy.name.clone(),
            });
        }
        if self.character.is_dead() {
            self.state = BattleState::EnemyWon;
            return Some(BattleEvent::PlayerDefeated);
        }
        None
    }

    fn report(&self, events: Vec<BattleEvent>) -> TurnReport {
        TurnReport {
            state: self.state,
            events,
        }
    }
}
