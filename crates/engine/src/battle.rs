//! Battle controller: prompts for actions until one side falls.

use anyhow::Result;
use tracing::info;

use crate::core::{BattleEvent, BattleOutcome, GameState, MessageLog, Tone};
use crate::frontend::Frontend;
use crate::types::HEAL_AMOUNT;

/// How the battle loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEnd {
    Decided(BattleOutcome),
    Quit,
}

/// Fight the enemy the player just walked into.
///
/// Returns once the enemy or the player is at zero health and the state has
/// recorded the result. Never exits the process.
pub fn run_battle<F: Frontend>(
    state: &mut GameState,
    log: &mut MessageLog,
    frontend: &mut F,
) -> Result<BattleEnd> {
    let Some(name) = state.current_enemy().map(|e| e.name) else {
        return Ok(BattleEnd::Quit);
    };
    log.push(format!("A {name} appears!"), Tone::Danger);
    info!(enemy = name, room = state.room(), "battle started");

    loop {
        if let Some(outcome) = state.battle_outcome() {
            match outcome {
                BattleOutcome::Victory => {
                    log.push(format!("You defeated the {name}!"), Tone::Success)
                }
                BattleOutcome::Defeat => log.push("You Died! Game Over!", Tone::Danger),
            }
            info!(enemy = name, ?outcome, health = state.player().health, "battle over");
            state.finish_battle(outcome);
            return Ok(BattleEnd::Decided(outcome));
        }

        let Some(action) = frontend.choose_action(&state.snapshot(log))? else {
            return Ok(BattleEnd::Quit);
        };
        let Some(report) = state.resolve_round(action) else {
            return Ok(BattleEnd::Quit);
        };

        for event in report.events {
            push_event(log, name, event);
        }
    }
}

fn push_event(log: &mut MessageLog, name: &str, event: BattleEvent) {
    match event {
        BattleEvent::PlayerHit { damage } => log.push(
            format!("You hit the {name} for {damage} damage!"),
            Tone::Success,
        ),
        BattleEvent::Blocked => log.push("You block the enemy's attack!", Tone::Warning),
        // The message names the nominal amount; the clamped gain is in the event.
        BattleEvent::Healed { .. } => log.push(format!("You heal {HEAL_AMOUNT} HP!"), Tone::Heal),
        BattleEvent::EnemyHit { damage } => log.push(
            format!("The {name} attacks for {damage} damage!"),
            Tone::Danger,
        ),
    }
}
