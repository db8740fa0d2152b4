//! The seam between the controllers and whatever the player is using.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::driver::GameOutcome;
use crate::types::{BattleAction, Direction};

/// A source of menu choices and a sink for frames.
///
/// Every prompt method receives the frame to show and blocks until the player
/// has picked exactly one entry. `Ok(None)` means the player asked to quit.
pub trait Frontend {
    /// "Move in which direction?"
    fn choose_direction(&mut self, snap: &GameSnapshot) -> Result<Option<Direction>>;

    /// "Choose your action:"
    fn choose_action(&mut self, snap: &GameSnapshot) -> Result<Option<BattleAction>>;

    /// Show the last frame of the run.
    fn present_outcome(&mut self, snap: &GameSnapshot, outcome: GameOutcome) -> Result<()>;
}
