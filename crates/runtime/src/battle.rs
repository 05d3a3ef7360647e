//! Drives a battle to its end.

use game_core::{Battle, BattleResult, CombatError, RngOracle};

use crate::api::ActionProvider;

/// Plays rounds until the battle reaches a terminal state.
///
/// Each round asks `provider` for an action, advances the battle and hands
/// the round's report back to the provider. Rewards are not applied here.
pub fn run_battle(
    battle: &mut Battle<'_>,
    provider: &mut dyn ActionProvider,
    rng: &dyn RngOracle,
) -> Result<BattleResult, CombatError> {
    tracing::info!(
        "Battle started: {} vs {}",
        battle.character().name,
        battle.enemy().name
    );

    while battle.is_active() {
        let action = provider.choose_action(&battle.view());
        let report = battle.advance(action, rng)?;

        for event in &report.events {
            tracing::debug!(round = battle.turn_counter(), %action, "{event}");
        }
        provider.observe(&report);
    }

    let result = battle.result().ok_or(CombatError::CombatNotActive)?;
    tracing::info!(
        state = %result.state,
        xp = result.xp_gained,
        gold = result.gold_gained,
        "Battle ended after {} rounds",
        battle.turn_counter()
    );
    Ok(result)
}
