//! Scripted frontends shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::Result;

use roguemaze::core::GameSnapshot;
use roguemaze::engine::{Frontend, GameOutcome};
use roguemaze::types::{BattleAction, Direction, Position};

/// Plays back fixed lists of choices; quits when a list runs dry.
#[derive(Default)]
pub struct ScriptedFrontend {
    pub directions: VecDeque<Direction>,
    pub actions: VecDeque<BattleAction>,
    pub direction_prompts: usize,
    pub action_prompts: usize,
    pub outcome: Option<(GameOutcome, GameSnapshot)>,
}

impl ScriptedFrontend {
    pub fn new(directions: &[Direction], actions: &[BattleAction]) -> Self {
        Self {
            directions: directions.iter().copied().collect(),
            actions: actions.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn choose_direction(&mut self, _snap: &GameSnapshot) -> Result<Option<Direction>> {
        self.direction_prompts += 1;
        Ok(self.directions.pop_front())
    }

    fn choose_action(&mut self, _snap: &GameSnapshot) -> Result<Option<BattleAction>> {
        self.action_prompts += 1;
        Ok(self.actions.pop_front())
    }

    fn present_outcome(&mut self, snap: &GameSnapshot, outcome: GameOutcome) -> Result<()> {
        self.outcome = Some((outcome, snap.clone()));
        Ok(())
    }
}

/// Walks to each waypoint in turn and fights whatever it meets.
///
/// Heals when health is at or below `heal_at`, attacks otherwise. A waypoint on
/// the current cell is reached by stepping off and back on.
pub struct AutoPilot {
    waypoints: VecDeque<Position>,
    pending: VecDeque<Direction>,
    grid_size: u8,
    heal_at: i32,
    pub snapshots_seen: Vec<GameSnapshot>,
    pub outcome: Option<(GameOutcome, GameSnapshot)>,
}

impl AutoPilot {
    pub fn new(waypoints: impl IntoIterator<Item = Position>, grid_size: u8, heal_at: i32) -> Self {
        Self {
            waypoints: waypoints.into_iter().collect(),
            pending: VecDeque::new(),
            grid_size,
            heal_at,
            snapshots_seen: Vec::new(),
            outcome: None,
        }
    }

    fn plan(&mut self, from: Position, to: Position) {
        if from == to {
            let (away, back) = if from.x + 1 < self.grid_size {
                (Direction::Down, Direction::Up)
            } else {
                (Direction::Up, Direction::Down)
            };
            self.pending.push_back(away);
            self.pending.push_back(back);
            return;
        }

        let vertical = if to.x > from.x { Direction::Down } else { Direction::Up };
        for _ in 0..from.x.abs_diff(to.x) {
            self.pending.push_back(vertical);
        }
        let horizontal = if to.y > from.y { Direction::Right } else { Direction::Left };
        for _ in 0..from.y.abs_diff(to.y) {
            self.pending.push_back(horizontal);
        }
    }
}

impl Frontend for AutoPilot {
    fn choose_direction(&mut self, snap: &GameSnapshot) -> Result<Option<Direction>> {
        self.snapshots_seen.push(snap.clone());
        loop {
            if let Some(dir) = self.pending.pop_front() {
                return Ok(Some(dir));
            }
            let Some(target) = self.waypoints.pop_front() else {
                return Ok(None);
            };
            self.plan(snap.player, target);
        }
    }

    fn choose_action(&mut self, snap: &GameSnapshot) -> Result<Option<BattleAction>> {
        self.snapshots_seen.push(snap.clone());
        if snap.player_health <= self.heal_at {
            Ok(Some(BattleAction::Heal))
        } else {
            Ok(Some(BattleAction::Attack))
        }
    }

    fn present_outcome(&mut self, snap: &GameSnapshot, outcome: GameOutcome) -> Result<()> {
        self.outcome = Some((outcome, snap.clone()));
        Ok(())
    }
}

/// How many log lines in `snap` read exactly `text`.
pub fn count_messages(snap: &GameSnapshot, text: &str) -> usize {
    snap.messages.iter().filter(|m| m.text == text).count()
}
