//! Dungeon module - grid layout and enemy placement
//!
//! The dungeon keeps two views of where enemies are:
//!
//! - [`Grid`]: a square matrix of [`Tile`] markers, used only for drawing
//! - [`Dungeon::placements`]: the authoritative list of (position, enemy) pairs
//!
//! Markers are never cleared when an enemy is defeated, and the player is never
//! written into the grid; the view overlays the player at render time.

use tracing::debug;

use crate::entity::Enemy;
use crate::rng::SimpleRng;
use crate::types::{Archetype, ConfigError, GameConfig, Position};

/// A grid cell marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Enemy,
}

/// Square grid of tile markers, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            tiles: vec![Tile::Empty; len],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline(always)]
    fn idx(&self, pos: Position) -> Option<usize> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        Some(usize::from(pos.x) * usize::from(self.size) + usize::from(pos.y))
    }

    /// Tile at `pos`, or `None` when outside the grid.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.idx(pos).map(|i| self.tiles[i])
    }

    pub fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(i) = self.idx(pos) {
            self.tiles[i] = tile;
        }
    }

    /// Every position currently holding [`Tile::Empty`], row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        let size = self.size;
        (0..size)
            .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
            .filter(|&p| self.get(p) == Some(Tile::Empty))
            .collect()
    }
}

/// An enemy standing on a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyPlacement {
    pub position: Position,
    pub enemy: Enemy,
}

/// Generated dungeon: grid markers plus the placement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    grid: Grid,
    placements: Vec<EnemyPlacement>,
}

impl Dungeon {
    /// Build a fresh dungeon.
    ///
    /// For each room, a cell is drawn uniformly from the cells that are still empty
    /// and then an archetype is drawn uniformly. Drawing from the remaining cells
    /// (rather than retrying random coordinates) bounds the work by the room count.
    pub fn generate(config: &GameConfig, rng: &mut SimpleRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = Grid::new(config.grid_size);
        let mut placements = Vec::with_capacity(usize::from(config.rooms));

        for _ in 0..config.rooms {
            let free = grid.empty_positions();
            let position = *rng.pick(&free).ok_or(ConfigError::TooManyRooms {
                rooms: config.rooms,
                cells: config.cells(),
            })?;
            let archetype = *rng.pick(&Archetype::ALL).unwrap_or(&Archetype::Goblin);

            grid.set(position, Tile::Enemy);
            debug!(x = position.x, y = position.y, enemy = archetype.name(), "placed enemy");
            placements.push(EnemyPlacement {
                position,
                enemy: Enemy::spawn(archetype),
            });
        }

        Ok(Self { grid, placements })
    }

    /// Assemble a dungeon from a hand-made layout.
    ///
    /// The grid markers are taken as given; callers keep them in sync with the
    /// placements.
    pub fn from_parts(grid: Grid, placements: Vec<EnemyPlacement>) -> Self {
        Self { grid, placements }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn placements(&self) -> &[EnemyPlacement] {
        &self.placements
    }

    /// Index of the placement at `pos`, if any.
    pub fn enemy_at(&self, pos: Position) -> Option<usize> {
        self.placements.iter().position(|p| p.position == pos)
    }

    pub fn enemy(&self, index: usize) -> Option<&Enemy> {
        self.placements.get(index).map(|p| &p.enemy)
    }

    pub fn enemy_mut(&mut self, index: usize) -> Option<&mut Enemy> {
        self.placements.get_mut(index).map(|p| &mut p.enemy)
    }
}
