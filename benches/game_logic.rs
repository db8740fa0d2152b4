use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roguemaze::core::{resolve_round, Dungeon, Enemy, GameState, MessageLog, Player, SimpleRng};
use roguemaze::term::{Footer, GameView, Viewport};
use roguemaze::types::{Archetype, BattleAction, GameConfig};

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut seed = 0u32;

    c.bench_function("generate_5x5", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            Dungeon::generate(black_box(&config), &mut SimpleRng::new(seed))
        })
    });

    let big = GameConfig::new(16, 200);
    c.bench_function("generate_16x16_200_rooms", |b| {
        b.iter(|| Dungeon::generate(black_box(&big), &mut SimpleRng::new(7)))
    });
}

fn bench_battle(c: &mut Criterion) {
    c.bench_function("dragon_fight", |b| {
        b.iter(|| {
            let mut player = Player::new();
            let mut dragon = Enemy::spawn(Archetype::Dragon);
            while resolve_round(&mut player, &mut dragon, black_box(BattleAction::Attack))
                .outcome
                .is_none()
            {}
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default(), 12345).unwrap();
    let snap = state.snapshot(&MessageLog::default());
    let view = GameView::default();
    let footer = Footer::Notice("bench");

    c.bench_function("render_80x40", |b| {
        b.iter(|| view.render(black_box(&snap), &footer, Viewport::new(80, 40)))
    });
}

criterion_group!(benches, bench_generate, bench_battle, bench_render);
criterion_main!(benches);
