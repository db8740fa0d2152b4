//! Battle rules: one round at a time.
//!
//! A round is the player's chosen action followed, unless the player defended or
//! the enemy fell, by the enemy's counter-attack. Damage is fixed; nothing here
//! is random.

use arrayvec::ArrayVec;

use crate::entity::{Enemy, Player};
use crate::types::BattleAction;

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Something that happened during a round, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEvent {
    /// The player struck the enemy.
    PlayerHit { damage: i32 },
    /// The player defended; the round ends with no exchange.
    Blocked,
    /// The player healed by `amount` (after clamping).
    Healed { amount: i32 },
    /// The enemy's counter-attack landed.
    EnemyHit { damage: i32 },
}

/// Result of [`resolve_round`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundReport {
    pub events: ArrayVec<BattleEvent, 2>,
    /// Set once either side's health has dropped to zero or below.
    pub outcome: Option<BattleOutcome>,
}

/// Whether the fight is over, checking the player first.
///
/// An enemy that is already at zero health yields `Victory` before any round
/// is played.
pub fn battle_outcome(player: &Player, enemy: &Enemy) -> Option<BattleOutcome> {
    if !player.is_alive() {
        Some(BattleOutcome::Defeat)
    } else if !enemy.is_alive() {
        Some(BattleOutcome::Victory)
    } else {
        None
    }
}

/// Play one round.
///
/// Defend is a free turn: no damage is dealt or taken, and the enemy does not
/// counter. Attack and Heal are followed by a counter-attack whenever the
/// enemy still has health.
pub fn resolve_round(player: &mut Player, enemy: &mut Enemy, action: BattleAction) -> RoundReport {
    let mut report = RoundReport::default();

    match action {
        BattleAction::Attack => {
            enemy.take_damage(player.attack);
            report.events.push(BattleEvent::PlayerHit {
                damage: player.attack,
            });
        }
        BattleAction::Defend => {
            report.events.push(BattleEvent::Blocked);
            report.outcome = battle_outcome(player, enemy);
            return report;
        }
        BattleAction::Heal => {
            let amount = player.heal();
            report.events.push(BattleEvent::Healed { amount });
        }
    }

    if enemy.is_alive() {
        player.take_damage(enemy.attack);
        report.events.push(BattleEvent::EnemyHit {
            damage: enemy.attack,
        });
    }

    report.outcome = battle_outcome(player, enemy);
    report
}
