//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of RogueMaze: dungeon generation, movement,
//! combat and the room counter. It has **no dependencies** on terminals or
//! input devices, which makes it:
//!
//! - **Deterministic**: the same seed always produces the same dungeon
//! - **Testable**: every rule can be exercised without a terminal
//! - **Portable**: any frontend can drive it
//!
//! # Module Structure
//!
//! - [`dungeon`]: square grid of markers plus the authoritative enemy placements
//! - [`entity`]: player and enemy instances, enemy art
//! - [`battle`]: one combat round (attack / defend / heal + counter-attack)
//! - [`game_state`]: the run as a state machine (exploring, fighting, cleared, dead)
//! - [`log`]: rolling message log
//! - [`rng`]: seeded LCG used for placement
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - The player starts at (0, 0) with 100 health and 10 attack
//! - Each of the 5 rooms is an enemy on a distinct random cell
//! - Moves are clamped to the grid; a blocked move costs nothing
//! - Defend is a free turn: no damage in either direction
//! - Heal restores 20 (capped at 100) and is still countered
//! - The dungeon is cleared once the room counter passes the room count
//!
//! # Example
//!
//! ```
//! use roguemaze_core::{GameState, MoveOutcome};
//! use roguemaze_types::{Direction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! // The top edge blocks an upward move from the start cell
//! assert_eq!(game.try_move(Direction::Up), MoveOutcome::Blocked);
//! assert_eq!(game.dungeon().placements().len(), 5);
//! ```

pub mod battle;
pub mod dungeon;
pub mod entity;
pub mod game_state;
pub mod log;
pub mod rng;
pub mod snapshot;

pub use roguemaze_types as types;

// Re-export commonly used types for convenience
pub use battle::{battle_outcome, resolve_round, BattleEvent, BattleOutcome, RoundReport};
pub use dungeon::{Dungeon, EnemyPlacement, Grid, Tile};
pub use entity::{Enemy, Player};
pub use game_state::{GameState, MoveOutcome, Phase};
pub use log::{Message, MessageLog, Tone};
pub use rng::SimpleRng;
pub use snapshot::{EncounterSnapshot, GameSnapshot};
