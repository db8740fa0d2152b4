//! Player and enemy instances.
//!
//! Stats come from `roguemaze_types`; this module owns the mutable health and the
//! display-only ASCII art.

use crate::types::{Archetype, Position, HEAL_AMOUNT, PLAYER_ATTACK, PLAYER_MAX_HEALTH};

pub const GOBLIN_ART: &str = r#"
  ,      ,
 /(.-""-.)\
 |  |   |  |
 |  |   |  |
  \ |   | /
   \|___|/
"#;

pub const ORC_ART: &str = r#"
   ,--./,-.
  / #      \
 |          |
  \        /
   `._,._,'
"#;

pub const DRAGON_ART: &str = r#"
        ,     \    /      ,
       / \    )\__/(     / \
      /   \  (_\  /_)   /   \
 ____/____\__\@  @/___/_____\____
|             |\../|              |
|              \VV/               |
|_________________________________|
 |    |  |  |  |  |  |  |  |  |  |
 |    |  |  |  |  |  |  |  |  |  |
"#;

pub const PLAYER_ART: &str = r#"
  O
 /|\
 / \
"#;

/// Art shown when an enemy of `archetype` appears.
pub fn archetype_art(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Goblin => GOBLIN_ART,
        Archetype::Orc => ORC_ART,
        Archetype::Dragon => DRAGON_ART,
    }
}

/// The adventurer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub health: i32,
    pub attack: i32,
    pub position: Position,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            health: PLAYER_MAX_HEALTH,
            attack: PLAYER_ATTACK,
            position: Position::new(0, 0),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Restore `HEAL_AMOUNT`, capped at `PLAYER_MAX_HEALTH`. Returns the amount gained.
    pub fn heal(&mut self) -> i32 {
        let before = self.health;
        self.health = (self.health + HEAL_AMOUNT).min(PLAYER_MAX_HEALTH);
        (self.health - before).max(0)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// One enemy instance, created fresh per placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub archetype: Archetype,
    pub name: &'static str,
    pub health: i32,
    pub attack: i32,
    pub art: &'static str,
}

impl Enemy {
    pub fn spawn(archetype: Archetype) -> Self {
        Self {
            archetype,
            name: archetype.name(),
            health: archetype.health(),
            attack: archetype.attack(),
            art: archetype_art(archetype),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}
