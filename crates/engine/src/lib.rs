//! Game controllers: the movement loop, the battle loop and the driver that
//! sequences them.
//!
//! The controllers only talk to the player through the [`Frontend`] trait, so a
//! full run can be played by a terminal, a test script or anything else that
//! can pick menu entries.

pub mod battle;
pub mod driver;
pub mod frontend;
pub mod movement;

pub use roguemaze_core as core;
pub use roguemaze_types as types;

pub use driver::{Game, GameOutcome};
pub use frontend::Frontend;
