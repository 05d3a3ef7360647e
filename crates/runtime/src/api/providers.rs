//! Abstraction for sourcing the player's battle choices.
//!
//! Session users plug in [`ActionProvider`] implementations so battles can run
//! with human input, scripted fixtures, or simple policies.

use std::collections::VecDeque;

use game_core::{BattleView, PlayerAction, TurnReport};

/// Trait for choosing the player's action each round.
///
/// Different implementations can handle:
/// - Player input (from a menu)
/// - Scripted actions
/// - Testing fixtures
pub trait ActionProvider {
    /// Choose an action given the state of both combatants.
    ///
    /// Interactive providers display `view` here.
    fn choose_action(&mut self, view: &BattleView) -> PlayerAction;

    /// Called with the outcome of every round.
    fn observe(&mut self, _report: &TurnReport) {}
}

/// A provider that always uses a basic attack.
/// Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicAttackProvider;

impl ActionProvider for BasicAttackProvider {
    fn choose_action(&mut self, _view: &BattleView) -> PlayerAction {
        PlayerAction::BasicAttack
    }
}

/// Plays a fixed list of actions, then falls back to basic attacks.
#[derive(Clone, Debug, Default)]
pub struct ScriptedActionProvider {
    script: VecDeque<PlayerAction>,
    reports: Vec<TurnReport>,
}

impl ScriptedActionProvider {
    pub fn new(script: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reports: Vec::new(),
        }
    }

    /// Reports observed so far, one per round.
    pub fn reports(&self) -> &[TurnReport] {
        &self.reports
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn choose_action(&mut self, _view: &BattleView) -> PlayerAction {
        self.script.pop_front().unwrap_or(PlayerAction::BasicAttack)
    }

    fn observe(&mut self, report: &TurnReport) {
        self.reports.push(report.clone());
    }
}
