//! Game state module - owns everything that changes during a run
//!
//! Ties together the player, the dungeon and the room counter, and exposes the
//! movement and battle rules as methods. The controllers in `roguemaze-engine`
//! drive these methods from player input; nothing here performs I/O.

use tracing::{debug, info};

use crate::battle::{battle_outcome, resolve_round, BattleOutcome, RoundReport};
use crate::dungeon::Dungeon;
use crate::entity::{Enemy, Player};
use crate::log::MessageLog;
use crate::rng::SimpleRng;
use crate::snapshot::{EncounterSnapshot, GameSnapshot};
use crate::types::{BattleAction, ConfigError, Direction, GameConfig, Position};

/// Where the run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a direction.
    AwaitingInput,
    /// Standing on an enemy's cell; the battle is in progress.
    Encountered { enemy: usize },
    /// A battle was just won and rooms remain.
    RoomCleared,
    /// The room counter passed the room count.
    Finished,
    /// The player's health reached zero.
    Dead,
}

/// Result of [`GameState::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The grid edge stopped the move; nothing changed.
    Blocked,
    /// Moved onto an unoccupied cell.
    Moved(Position),
    /// Moved onto a cell with a placement; a battle must follow.
    Encounter { position: Position, enemy: usize },
    /// Movement is not accepted in the current phase.
    Unavailable,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    seed: u32,
    player: Player,
    dungeon: Dungeon,
    /// Current room number, starting at 1. The dungeon is clear once this
    /// exceeds `config.rooms`, so it must be wider than the room count.
    room: u16,
    phase: Phase,
}

impl GameState {
    /// Generate a dungeon from `seed` and place the player at (0, 0).
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let mut rng = SimpleRng::new(seed);
        let dungeon = Dungeon::generate(&config, &mut rng)?;
        info!(seed, size = config.grid_size, rooms = config.rooms, "dungeon generated");
        Ok(Self::with_dungeon(config, seed, dungeon))
    }

    /// Start a run on a prepared dungeon.
    pub fn with_dungeon(config: GameConfig, seed: u32, dungeon: Dungeon) -> Self {
        Self {
            config,
            seed,
            player: Player::new(),
            dungeon,
            room: 1,
            phase: Phase::AwaitingInput,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn room(&self) -> u16 {
        self.room
    }

    pub fn rooms_cleared(&self) -> u16 {
        self.room - 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.room > u16::from(self.config.rooms)
    }

    /// Move the player one cell.
    ///
    /// A move clamped by the grid edge is `Blocked` and costs nothing. A committed
    /// move onto a placement switches the phase to [`Phase::Encountered`].
    pub fn try_move(&mut self, dir: Direction) -> MoveOutcome {
        if !matches!(self.phase, Phase::AwaitingInput | Phase::RoomCleared) {
            return MoveOutcome::Unavailable;
        }

        let current = self.player.position;
        let candidate = current.step(dir, self.dungeon.size());
        if candidate == current {
            debug!(x = current.x, y = current.y, dir = dir.label(), "move blocked");
            return MoveOutcome::Blocked;
        }

        self.player.position = candidate;
        debug!(x = candidate.x, y = candidate.y, "moved");

        match self.dungeon.enemy_at(candidate) {
            Some(enemy) => {
                self.phase = Phase::Encountered { enemy };
                MoveOutcome::Encounter {
                    position: candidate,
                    enemy,
                }
            }
            None => {
                self.phase = Phase::AwaitingInput;
                MoveOutcome::Moved(candidate)
            }
        }
    }

    /// The enemy being fought, if a battle is in progress.
    pub fn current_enemy(&self) -> Option<&Enemy> {
        match self.phase {
            Phase::Encountered { enemy } => self.dungeon.enemy(enemy),
            _ => None,
        }
    }

    /// Whether the current battle is already decided.
    pub fn battle_outcome(&self) -> Option<BattleOutcome> {
        self.current_enemy()
            .and_then(|enemy| battle_outcome(&self.player, enemy))
    }

    /// Play one round of the current battle. `None` when not in a battle.
    pub fn resolve_round(&mut self, action: BattleAction) -> Option<RoundReport> {
        let Phase::Encountered { enemy } = self.phase else {
            return None;
        };
        let enemy = self.dungeon.enemy_mut(enemy)?;
        Some(resolve_round(&mut self.player, enemy, action))
    }

    /// Close the current battle.
    ///
    /// Victory advances the room counter; defeat ends the run.
    pub fn finish_battle(&mut self, outcome: BattleOutcome) {
        if !matches!(self.phase, Phase::Encountered { .. }) {
            return;
        }
        match outcome {
            BattleOutcome::Victory => {
                self.room += 1;
                self.phase = if self.is_finished() {
                    Phase::Finished
                } else {
                    Phase::RoomCleared
                };
                info!(cleared = self.rooms_cleared(), rooms = self.config.rooms, "room cleared");
            }
            BattleOutcome::Defeat => {
                self.phase = Phase::Dead;
                info!(cleared = self.rooms_cleared(), "player died");
            }
        }
    }

    /// Copy everything the renderer needs.
    pub fn snapshot(&self, log: &MessageLog) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.dungeon.size(),
            tiles: self.dungeon.grid().tiles().to_vec(),
            player: self.player.position,
            player_health: self.player.health,
            room: self.room,
            rooms: self.config.rooms,
            phase: self.phase,
            encounter: self.current_enemy().map(EncounterSnapshot::from_enemy),
            messages: log.iter().cloned().collect(),
        }
    }
}
