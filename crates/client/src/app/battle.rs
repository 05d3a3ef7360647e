//! Battle input from the console.

use std::io::{BufRead, Write};

use game_core::{BattleView, PlayerAction, TurnReport};
use runtime::ActionProvider;

use super::console::Console;

/// Shows each round and asks the player what to do.
///
/// [`ActionProvider`] cannot fail, so I/O errors and exhausted input fall
/// back to a basic attack; the battle still ends because every attack deals
/// damage.
pub struct ConsoleActionProvider<'a, R, W> {
    console: &'a mut Console<R, W>,
}

impl<'a, R: BufRead, W: Write> ConsoleActionProvider<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> ActionProvider for ConsoleActionProvider<'_, R, W> {
    fn choose_action(&mut self, view: &BattleView) -> PlayerAction {
        let options = PlayerAction::ALL.map(|action| action.to_string());
        let choice = self
            .console
            .say(view)
            .and_then(|()| self.console.choose("Your move", &options));

        match choice {
            Ok(Some(index)) => PlayerAction::ALL[index],
            Ok(None) => PlayerAction::BasicAttack,
            Err(error) => {
                tracing::warn!("Battle input failed: {error}");
                PlayerAction::BasicAttack
            }
        }
    }

    fn observe(&mut self, report: &TurnReport) {
        for event in &report.events {
            if let Err(error) = self.console.say(format_args!(">>> {event}")) {
                tracing::warn!("Battle output failed: {error}");
                return;
            }
        }
    }
}
