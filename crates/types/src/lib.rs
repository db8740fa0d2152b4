//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data, usable from the rules (`roguemaze-core`),
//! the controllers (`roguemaze-engine`) and the terminal layers alike.
//!
//! # Dungeon Dimensions
//!
//! - **Grid**: 5x5 cells (indexed 0-4 on both axes)
//! - **Rooms**: 5 enemy encounters per dungeon
//! - **Start**: the player always starts at (0, 0)
//!
//! Positions use `x` for the row (Up/Down) and `y` for the column (Left/Right).
//!
//! # Combat Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_MAX_HEALTH` | 100 | Starting health and heal ceiling |
//! | `PLAYER_ATTACK` | 10 | Damage dealt by an Attack |
//! | `HEAL_AMOUNT` | 20 | Health restored by a Heal (before clamping) |
//!
//! # Archetypes
//!
//! | Archetype | Health | Attack |
//! |-----------|--------|--------|
//! | Goblin | 20 | 5 |
//! | Orc | 35 | 7 |
//! | Dragon | 50 | 12 |
//!
//! # Examples
//!
//! ```
//! use roguemaze_types::{Archetype, BattleAction, Direction, Position, GRID_SIZE};
//!
//! // Menu entries in display order
//! assert_eq!(Direction::ALL[0].label(), "Up");
//! assert_eq!(BattleAction::ALL[2].label(), "Heal");
//!
//! // Movement is clamped to the grid
//! let origin = Position::new(0, 0);
//! assert_eq!(origin.step(Direction::Up, GRID_SIZE), origin);
//! assert_eq!(origin.step(Direction::Down, GRID_SIZE), Position::new(1, 0));
//!
//! // Archetype stats
//! assert_eq!(Archetype::Goblin.health(), 20);
//! assert_eq!(Archetype::Dragon.attack(), 12);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Default grid edge length (5x5)
pub const GRID_SIZE: u8 = 5;

/// Default number of rooms (enemy encounters) per dungeon
pub const MAX_ROOMS: u8 = 5;

/// Player starting health, also the ceiling for healing
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Damage dealt by the player's Attack action
pub const PLAYER_ATTACK: i32 = 10;

/// Health restored by the Heal action before clamping
pub const HEAL_AMOUNT: i32 = 20;


/// Grid coordinate
///
/// `x` is the row (Up decrements it), `y` is the column (Left decrements it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Move one cell in `dir`, clamped to `[0, size - 1]` on both axes.
    ///
    /// Returns `self` unchanged when the move would leave the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use roguemaze_types::{Direction, Position};
    ///
    /// let p = Position::new(2, 4);
    /// assert_eq!(p.step(Direction::Right, 5), p);
    /// assert_eq!(p.step(Direction::Left, 5), Position::new(2, 3));
    /// ```
    pub fn step(self, dir: Direction, size: u8) -> Self {
        let max = size.saturating_sub(1);
        match dir {
            Direction::Up => Self::new(self.x.saturating_sub(1), self.y),
            Direction::Down => Self::new(self.x.saturating_add(1).min(max), self.y),
            Direction::Left => Self::new(self.x, self.y.saturating_sub(1)),
            Direction::Right => Self::new(self.x, self.y.saturating_add(1).min(max)),
        }
    }

    /// Whether the position lies inside a `size` x `size` grid.
    pub fn in_bounds(self, size: u8) -> bool {
        self.x < size && self.y < size
    }
}

/// Movement menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Menu order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Display label used by the movement menu
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// Combat menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleAction {
    /// Deal `PLAYER_ATTACK` damage, then take a counter-attack if the enemy survives
    Attack,
    /// Skip the exchange entirely: no damage either way
    Defend,
    /// Restore up to `HEAL_AMOUNT` health, then take a counter-attack
    Heal,
}

impl BattleAction {
    /// Menu order.
    pub const ALL: [BattleAction; 3] = [
        BattleAction::Attack,
        BattleAction::Defend,
        BattleAction::Heal,
    ];

    /// Display label used by the combat menu
    pub fn label(&self) -> &'static str {
        match self {
            BattleAction::Attack => "Attack",
            BattleAction::Defend => "Defend",
            BattleAction::Heal => "Heal",
        }
    }
}

/// The three enemy templates
///
/// Stats are fixed; every placement gets a fresh instance built from one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Goblin,
    Orc,
    Dragon,
}

impl Archetype {
    /// Draw order used by the dungeon generator.
    pub const ALL: [Archetype; 3] = [Archetype::Goblin, Archetype::Orc, Archetype::Dragon];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Goblin => "Goblin",
            Archetype::Orc => "Orc",
            Archetype::Dragon => "Dragon",
        }
    }

    /// Starting health
    pub fn health(&self) -> i32 {
        match self {
            Archetype::Goblin => 20,
            Archetype::Orc => 35,
            Archetype::Dragon => 50,
        }
    }

    /// Damage dealt per counter-attack (never misses, never varies)
    pub fn attack(&self) -> i32 {
        match self {
            Archetype::Goblin => 5,
            Archetype::Orc => 7,
            Archetype::Dragon => 12,
        }
    }
}
