//! Movement controller: the exploration loop.

use anyhow::Result;
use tracing::debug;

use crate::battle::{run_battle, BattleEnd};
use crate::core::{BattleOutcome, GameState, MessageLog, MoveOutcome, Tone};
use crate::driver::GameOutcome;
use crate::frontend::Frontend;

pub const BLOCKED_MESSAGE: &str = "You cannot move further!";
pub const CLEARED_MESSAGE: &str = "Congratulations! You cleared the dungeon!";

/// Read directions until the dungeon is cleared, the player dies or quits.
///
/// A blocked move only adds a warning and re-prompts. Stepping onto a
/// placement runs the battle controller before the next prompt.
pub fn run_movement<F: Frontend>(
    state: &mut GameState,
    log: &mut MessageLog,
    frontend: &mut F,
) -> Result<GameOutcome> {
    while !state.is_finished() {
        let Some(dir) = frontend.choose_direction(&state.snapshot(log))? else {
            return Ok(GameOutcome::Quit);
        };

        match state.try_move(dir) {
            MoveOutcome::Blocked => log.push(BLOCKED_MESSAGE, Tone::Warning),
            MoveOutcome::Moved(pos) => debug!(x = pos.x, y = pos.y, "explored"),
            MoveOutcome::Encounter { .. } => match run_battle(state, log, frontend)? {
                BattleEnd::Decided(BattleOutcome::Victory) => {}
                BattleEnd::Decided(BattleOutcome::Defeat) => return Ok(GameOutcome::Died),
                BattleEnd::Quit => return Ok(GameOutcome::Quit),
            },
            MoveOutcome::Unavailable => return Ok(GameOutcome::Quit),
        }
    }

    log.push(CLEARED_MESSAGE, Tone::Success);
    Ok(GameOutcome::Cleared)
}
