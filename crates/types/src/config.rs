//! Dungeon configuration and its validation.

use thiserror::Error;

use crate::{GRID_SIZE, MAX_ROOMS};

/// Smallest grid where the player can move at all.
pub const MIN_GRID_SIZE: u8 = 2;

/// Largest grid the terminal view is laid out for.
pub const MAX_GRID_SIZE: u8 = 16;

/// Errors raised when a [`GameConfig`] cannot produce a playable dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small (minimum {})", MIN_GRID_SIZE)]
    GridTooSmall { size: u8 },

    #[error("grid size {size} is too large (maximum {})", MAX_GRID_SIZE)]
    GridTooLarge { size: u8 },

    #[error("a dungeon needs at least one room")]
    NoRooms,

    /// More rooms than cells: enemy placement could never finish.
    #[error("{rooms} rooms do not fit in {cells} cells")]
    TooManyRooms { rooms: u8, cells: u16 },
}

/// Dungeon parameters
///
/// The defaults reproduce the classic 5x5 dungeon with 5 rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid edge length (the grid is square)
    pub grid_size: u8,
    /// Number of enemies to place and defeat
    pub rooms: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            rooms: MAX_ROOMS,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: u8, rooms: u8) -> Self {
        Self { grid_size, rooms }
    }

    /// Total number of cells in the grid.
    pub fn cells(&self) -> u16 {
        u16::from(self.grid_size) * u16::from(self.grid_size)
    }

    /// Check that the dungeon is generatable and winnable.
    ///
    /// # Examples
    ///
    /// ```
    /// use roguemaze_types::{ConfigError, GameConfig};
    ///
    /// assert!(GameConfig::default().validate().is_ok());
    /// assert_eq!(
    ///     GameConfig::new(2, 5).validate(),
    ///     Err(ConfigError::TooManyRooms { rooms: 5, cells: 4 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
            });
        }
        if self.rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        if u16::from(self.rooms) > self.cells() {
            return Err(ConfigError::TooManyRooms {
                rooms: self.rooms,
                cells: self.cells(),
            });
        }
        Ok(())
    }
}
