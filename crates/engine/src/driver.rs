//! Game driver: generate, explore, report.

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{GameSnapshot, GameState, MessageLog, Tone};
use crate::frontend::Frontend;
use crate::movement::run_movement;
use crate::types::GameConfig;

pub const WELCOME_MESSAGE: &str = "Welcome to RogueMaze!";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every room was cleared.
    Cleared,
    /// The player's health reached zero.
    Died,
    /// The player left the game.
    Quit,
}

impl GameOutcome {
    /// Line printed once the terminal is back to normal.
    pub fn farewell(&self) -> &'static str {
        match self {
            GameOutcome::Cleared => "Congratulations! You cleared the dungeon!",
            GameOutcome::Died => "You Died! Game Over!",
            GameOutcome::Quit => "You flee the dungeon.",
        }
    }
}

/// One run: the state plus its message log.
pub struct Game {
    state: GameState,
    log: MessageLog,
}

impl Game {
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        let state = GameState::new(config, seed)
            .with_context(|| format!("cannot build a dungeon from {config:?}"))?;
        Ok(Self::from_state(state))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            log: MessageLog::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(&self.log)
    }

    /// Play the run to its end and show the final frame.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<GameOutcome> {
        self.log.push(WELCOME_MESSAGE, Tone::Title);
        info!(seed = self.state.seed(), "game started");

        let outcome = run_movement(&mut self.state, &mut self.log, frontend)?;

        info!(
            ?outcome,
            cleared = self.state.rooms_cleared(),
            health = self.state.player().health,
            "game over"
        );
        frontend.present_outcome(&self.snapshot(), outcome)?;
        Ok(outcome)
    }
}
