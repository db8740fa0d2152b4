//! Combat rules, on their own and through the battle controller.

mod common;

use common::{count_messages, ScriptedFrontend};
use roguemaze::core::{
    resolve_round, BattleEvent, BattleOutcome, Dungeon, Enemy, EnemyPlacement, GameState, Grid,
    Phase, Player, Tile,
};
use roguemaze::engine::{Game, GameOutcome};
use roguemaze::types::{Archetype, BattleAction, Direction, GameConfig, Position};

fn game_with(size: u8, rooms: u8, enemies: &[(Position, Archetype)]) -> Game {
    let mut grid = Grid::new(size);
    let placements = enemies
        .iter()
        .map(|&(position, archetype)| {
            grid.set(position, Tile::Enemy);
            EnemyPlacement {
                position,
                enemy: Enemy::spawn(archetype),
            }
        })
        .collect();
    let config = GameConfig::new(size, rooms);
    Game::from_state(GameState::with_dungeon(
        config,
        0,
        Dungeon::from_parts(grid, placements),
    ))
}

#[test]
fn two_attacks_finish_a_goblin_for_one_counter() {
    let mut player = Player::new();
    let mut goblin = Enemy::spawn(Archetype::Goblin);

    let first = resolve_round(&mut player, &mut goblin, BattleAction::Attack);
    assert_eq!(goblin.health, 10);
    assert_eq!(player.health, 95);
    assert_eq!(first.outcome, None);

    let second = resolve_round(&mut player, &mut goblin, BattleAction::Attack);
    assert_eq!(goblin.health, 0);
    assert_eq!(player.health, 95);
    assert_eq!(second.outcome, Some(BattleOutcome::Victory));
}

#[test]
fn heal_from_ninety_reaches_exactly_one_hundred() {
    let mut player = Player::new();
    player.health = 90;
    let mut goblin = Enemy::spawn(Archetype::Goblin);

    let report = resolve_round(&mut player, &mut goblin, BattleAction::Heal);
    assert_eq!(report.events[0], BattleEvent::Healed { amount: 10 });
    // 100 after the heal, then the goblin's counter.
    assert_eq!(player.health, 100 - 5);
}

#[test]
fn defend_never_costs_health() {
    for archetype in Archetype::ALL {
        let mut player = Player::new();
        player.health = 1;
        let mut enemy = Enemy::spawn(archetype);

        for _ in 0..10 {
            let report = resolve_round(&mut player, &mut enemy, BattleAction::Defend);
            assert_eq!(report.events.as_slice(), &[BattleEvent::Blocked]);
            assert_eq!(report.outcome, None);
        }
        assert_eq!(player.health, 1);
        assert_eq!(enemy.health, archetype.health());
    }
}

#[test]
fn goblin_battle_through_the_controller() {
    let mut game = game_with(5, 1, &[(Position::new(0, 1), Archetype::Goblin)]);
    let mut fe = ScriptedFrontend::new(
        &[Direction::Right],
        &[BattleAction::Attack, BattleAction::Attack],
    );

    let outcome = game.run(&mut fe).unwrap();
    assert_eq!(outcome, GameOutcome::Cleared);
    assert_eq!(game.state().player().health, 95);
    assert_eq!(fe.action_prompts, 2);

    let snap = game.snapshot();
    assert_eq!(count_messages(&snap, "A Goblin appears!"), 1);
    assert_eq!(count_messages(&snap, "You hit the Goblin for 10 damage!"), 2);
    assert_eq!(count_messages(&snap, "The Goblin attacks for 5 damage!"), 1);
    assert_eq!(count_messages(&snap, "You defeated the Goblin!"), 1);
}

#[test]
fn defend_then_heal_messages() {
    let mut game = game_with(
        5,
        2,
        &[
            (Position::new(1, 0), Archetype::Orc),
            (Position::new(4, 4), Archetype::Orc),
        ],
    );
    let mut fe = ScriptedFrontend::new(
        &[Direction::Down],
        &[BattleAction::Defend, BattleAction::Heal],
    );

    // Script runs out mid-battle: the player quits.
    assert_eq!(game.run(&mut fe).unwrap(), GameOutcome::Quit);
    assert_eq!(game.state().player().health, 100 - 7);

    let snap = game.snapshot();
    assert_eq!(count_messages(&snap, "You block the enemy's attack!"), 1);
    // Healing at full health still reads as the nominal amount.
    assert_eq!(count_messages(&snap, "You heal 20 HP!"), 1);
    assert_eq!(count_messages(&snap, "You heal 0 HP!"), 0);
    assert_eq!(count_messages(&snap, "The Orc attacks for 7 damage!"), 1);
}

#[test]
fn death_is_returned_not_exited() {
    let mut game = game_with(5, 1, &[(Position::new(0, 1), Archetype::Dragon)]);
    game.state_mut().player_mut().health = 12;
    let mut fe = ScriptedFrontend::new(&[Direction::Right], &[BattleAction::Attack]);

    let outcome = game.run(&mut fe).unwrap();
    assert_eq!(outcome, GameOutcome::Died);
    assert_eq!(game.state().phase(), Phase::Dead);
    assert_eq!(game.state().rooms_cleared(), 0);

    let (presented, snap) = fe.outcome.expect("final frame presented");
    assert_eq!(presented, GameOutcome::Died);
    assert_eq!(count_messages(&snap, "You Died! Game Over!"), 1);
}

#[test]
fn revisiting_a_defeated_enemy_clears_another_room() {
    let mut game = game_with(
        5,
        2,
        &[
            (Position::new(0, 1), Archetype::Goblin),
            (Position::new(4, 4), Archetype::Dragon),
        ],
    );
    let mut fe = ScriptedFrontend::new(
        &[Direction::Right, Direction::Left, Direction::Right],
        &[BattleAction::Attack, BattleAction::Attack],
    );

    let outcome = game.run(&mut fe).unwrap();
    assert_eq!(outcome, GameOutcome::Cleared);
    // The second visit never prompts for an action.
    assert_eq!(fe.action_prompts, 2);
    assert_eq!(game.state().rooms_cleared(), 2);
    assert_eq!(count_messages(&game.snapshot(), "You defeated the Goblin!"), 2);
}

#[test]
fn largest_accepted_room_count_runs_to_the_end() {
    let mut game = game_with(16, u8::MAX, &[(Position::new(0, 1), Archetype::Goblin)]);
    let directions: Vec<Direction> = (0..u8::MAX)
        .flat_map(|_| [Direction::Right, Direction::Left])
        .collect();
    let mut fe = ScriptedFrontend::new(
        &directions,
        &[BattleAction::Attack, BattleAction::Attack],
    );

    assert_eq!(game.run(&mut fe).unwrap(), GameOutcome::Cleared);
    assert_eq!(game.state().phase(), Phase::Finished);
    assert_eq!(game.state().rooms_cleared(), 255);
    // Only the first visit is a real fight.
    assert_eq!(fe.action_prompts, 2);

    let (presented, snap) = fe.outcome.expect("final frame presented");
    assert_eq!(presented, GameOutcome::Cleared);
    assert_eq!(
        count_messages(&snap, "Congratulations! You cleared the dungeon!"),
        1
    );
}
