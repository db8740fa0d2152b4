//! Read-only copy of a game state for rendering and for frontends.

use crate::dungeon::Tile;
use crate::entity::Enemy;
use crate::game_state::Phase;
use crate::log::Message;
use crate::types::{Archetype, Position, PLAYER_MAX_HEALTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSnapshot {
    pub archetype: Archetype,
    pub name: &'static str,
    pub health: i32,
    pub attack: i32,
    pub art: &'static str,
}

impl EncounterSnapshot {
    pub fn from_enemy(enemy: &Enemy) -> Self {
        Self {
            archetype: enemy.archetype,
            name: enemy.name,
            health: enemy.health,
            attack: enemy.attack,
            art: enemy.art,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid_size: u8,
    /// Row-major grid markers. The player is not in here.
    pub tiles: Vec<Tile>,
    pub player: Position,
    pub player_health: i32,
    /// Current room number (1-based).
    pub room: u16,
    pub rooms: u8,
    pub phase: Phase,
    pub encounter: Option<EncounterSnapshot>,
    /// Message log, oldest first.
    pub messages: Vec<Message>,
}

impl GameSnapshot {
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        if !pos.in_bounds(self.grid_size) {
            return None;
        }
        let i = usize::from(pos.x) * usize::from(self.grid_size) + usize::from(pos.y);
        self.tiles.get(i).copied()
    }

    pub fn max_health(&self) -> i32 {
        PLAYER_MAX_HEALTH
    }

    pub fn rooms_cleared(&self) -> u16 {
        self.room.saturating_sub(1)
    }

    pub fn in_battle(&self) -> bool {
        self.encounter.is_some()
    }
}
