//! Movement rules: clamping, blocked moves and encounters.

use roguemaze::core::{
    Dungeon, Enemy, EnemyPlacement, GameState, Grid, MoveOutcome, Phase, SimpleRng, Tile,
};
use roguemaze::types::{Archetype, Direction, GameConfig, Position};

fn empty_dungeon(size: u8) -> GameState {
    let config = GameConfig::new(size, 1);
    GameState::with_dungeon(config, 0, Dungeon::from_parts(Grid::new(size), Vec::new()))
}

fn dungeon_with(size: u8, enemies: &[(Position, Archetype)]) -> GameState {
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
    let config = GameConfig::new(size, enemies.len() as u8);
    GameState::with_dungeon(config, 0, Dungeon::from_parts(grid, placements))
}

#[test]
fn random_walks_never_leave_the_grid() {
    for seed in 1..50 {
        let mut rng = SimpleRng::new(seed);
        let mut state = empty_dungeon(5);

        for _ in 0..200 {
            let dir = Direction::ALL[rng.next_index(4)];
            let before = state.player().position;
            let outcome = state.try_move(dir);
            let after = state.player().position;

            assert!(after.x <= 4 && after.y <= 4);
            match outcome {
                MoveOutcome::Blocked => assert_eq!(before, after),
                MoveOutcome::Moved(p) => {
                    assert_eq!(p, after);
                    assert_eq!(before.x.abs_diff(after.x) + before.y.abs_diff(after.y), 1);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}

#[test]
fn up_and_left_are_blocked_at_start() {
    let mut state = empty_dungeon(5);
    assert_eq!(state.try_move(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(state.try_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(state.player().position, Position::new(0, 0));
}

#[test]
fn down_and_right_are_blocked_at_far_corner() {
    let mut state = empty_dungeon(5);
    for _ in 0..4 {
        state.try_move(Direction::Down);
        state.try_move(Direction::Right);
    }
    assert_eq!(state.player().position, Position::new(4, 4));
    assert_eq!(state.try_move(Direction::Down), MoveOutcome::Blocked);
    assert_eq!(state.try_move(Direction::Right), MoveOutcome::Blocked);
    assert_eq!(state.player().position, Position::new(4, 4));
}

#[test]
fn up_moves_along_rows_and_right_along_columns() {
    let mut state = empty_dungeon(5);
    assert_eq!(state.try_move(Direction::Down), MoveOutcome::Moved(Position::new(1, 0)));
    assert_eq!(state.try_move(Direction::Right), MoveOutcome::Moved(Position::new(1, 1)));
    assert_eq!(state.try_move(Direction::Up), MoveOutcome::Moved(Position::new(0, 1)));
    assert_eq!(state.try_move(Direction::Left), MoveOutcome::Moved(Position::new(0, 0)));
}

#[test]
fn entering_an_enemy_cell_is_an_encounter() {
    let mut state = dungeon_with(5, &[(Position::new(0, 1), Archetype::Orc)]);
    assert_eq!(
        state.try_move(Direction::Right),
        MoveOutcome::Encounter {
            position: Position::new(0, 1),
            enemy: 0
        }
    );
    assert_eq!(state.phase(), Phase::Encountered { enemy: 0 });
    assert_eq!(state.current_enemy().map(|e| e.health), Some(35));
}

#[test]
fn an_enemy_on_the_start_cell_waits_for_a_return_visit() {
    let mut state = dungeon_with(5, &[(Position::new(0, 0), Archetype::Goblin)]);
    assert_eq!(state.phase(), Phase::AwaitingInput);
    assert!(matches!(state.try_move(Direction::Down), MoveOutcome::Moved(_)));
    assert!(matches!(
        state.try_move(Direction::Up),
        MoveOutcome::Encounter { enemy: 0, .. }
    ));
}
