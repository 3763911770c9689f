use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_snake::core::{leaderboard, place_food, SnakeGame, TickResult};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::{Bounds, LeaderboardItem, Settings};

fn bench_advance(c: &mut Criterion) {
    let settings = Settings::default();
    let bounds = Bounds::new(40, 120);
    let mut game = SnakeGame::with_rng(settings, bounds, StdRng::seed_from_u64(12345));

    c.bench_function("snake_advance", |b| {
        b.iter(|| {
            if game.advance() == TickResult::Collided {
                game.reset(settings);
            }
            black_box(game.score());
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let settings = Settings {
        food_count: 20,
        ..Settings::default()
    };
    let mut game = SnakeGame::with_rng(settings, Bounds::new(40, 120), StdRng::seed_from_u64(7));

    c.bench_function("snake_reset_20_food", |b| {
        b.iter(|| game.reset(black_box(settings)))
    });
}

fn bench_place_food_crowded(c: &mut Criterion) {
    let bounds = Bounds::new(20, 20);
    let mut rng = StdRng::seed_from_u64(99);

    // Only the last row is free, so sampling mostly misses.
    c.bench_function("place_food_crowded", |b| {
        b.iter(|| place_food(&mut rng, bounds, |p| p.row < 19))
    });
}

fn bench_leaderboard_insert(c: &mut Criterion) {
    let list: Vec<LeaderboardItem> = (0..500)
        .map(|s| LeaderboardItem::new("01/01/2024, 00:00:00", s))
        .collect();

    c.bench_function("leaderboard_insert_500", |b| {
        b.iter(|| {
            leaderboard::insert(
                black_box(list.clone()),
                LeaderboardItem::new("01/01/2024, 00:00:01", 250),
            )
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = SnakeGame::with_rng(
        Settings::default(),
        Bounds::new(40, 120),
        StdRng::seed_from_u64(1),
    );
    let view = GameView::default();
    let vp = Viewport::new(122, 42);

    c.bench_function("render_game_frame", |b| {
        b.iter(|| black_box(view.render(&game, false, vp)))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_reset,
    bench_place_food_crowded,
    bench_leaderboard_insert,
    bench_render
);
criterion_main!(benches);
