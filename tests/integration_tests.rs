//! Integration tests for the game loop and mode transitions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_snake::core::{App, Effect, Mode, Snake, SnakeGame, TickResult};
use tui_snake::types::{Action, Bounds, Direction, LeaderboardItem, Position, Settings};

fn pos(row: i16, col: i16) -> Position {
    Position::new(row, col)
}

fn app() -> App {
    App::with_seed(Settings::default(), Vec::new(), Bounds::new(20, 60), 42)
}

fn game_of(app: &App) -> &SnakeGame {
    match app.mode() {
        Mode::Game(session) => &session.game,
        other => panic!("expected game, got {}", other.name()),
    }
}

#[test]
fn test_tick_moves_one_cell_without_scoring() {
    let mut app = app();
    app.handle(Action::Confirm);

    let before = game_of(&app).clone();
    assert_eq!(before.score(), 0);
    assert_eq!(before.snake().len(), 5);

    let head = before.snake().head();
    let expected_head = head.step(before.direction());
    let blocked = before.food().contains(&expected_head)
        || !before.bounds().contains(expected_head);

    assert!(!blocked, "seed must give an unobstructed first move");

    assert_eq!(app.tick(), None);
    let after = game_of(&app);
    assert_eq!(after.snake().head(), expected_head);
    assert_eq!(after.snake().len(), 5);
    assert_eq!(after.score(), 0);
    // Remaining segments are still stacked where the head was.
    assert!(after.snake().body().iter().skip(1).all(|&p| p == head));
}

#[test]
fn test_eating_food_scores_and_grows() {
    let body = [pos(5, 5), pos(5, 4), pos(5, 3), pos(5, 2), pos(5, 1)];
    let snake = Snake::from_segments(body, Direction::Right).unwrap();
    let mut game = SnakeGame::with_layout(
        Settings::default(),
        Bounds::new(10, 20),
        snake,
        vec![pos(5, 6)],
        StdRng::seed_from_u64(3),
    );

    assert_eq!(game.advance(), TickResult::Ate);
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().len(), 6);
    assert_eq!(game.snake().head(), pos(5, 6));

    assert_eq!(game.food().len(), 1);
    let food = game.food()[0];
    assert!(game.bounds().contains(food));
    assert!(!game.snake().occupies(food));
}

#[test]
fn test_running_into_own_body_ends_game() {
    let body = [pos(5, 5), pos(5, 6), pos(6, 6), pos(6, 5), pos(6, 4)];
    let snake = Snake::from_segments(body, Direction::Left).unwrap();
    let mut game = SnakeGame::with_layout(
        Settings::default(),
        Bounds::new(10, 20),
        snake,
        vec![pos(0, 0)],
        StdRng::seed_from_u64(5),
    );
    assert!(game.set_direction(Direction::Down));

    let mut app = app();
    app.enter_game_with(game);

    let effect = app.tick();
    assert_eq!(effect, Some(Effect::RecordScore(0)));
    let Mode::Death(screen) = app.mode() else {
        panic!("expected death, got {}", app.mode().name());
    };
    // Collision does not move the body.
    assert_eq!(screen.game.snake().head(), pos(5, 5));
}

#[test]
fn test_play_again_resets_session() {
    let body = [pos(0, 3), pos(0, 4), pos(0, 5)];
    let snake = Snake::from_segments(body, Direction::Up).unwrap();
    let mut game = SnakeGame::with_layout(
        Settings::default(),
        Bounds::new(10, 20),
        snake,
        vec![],
        StdRng::seed_from_u64(8),
    );
    game.set_direction(Direction::Up);

    let mut app = app();
    app.enter_game_with(game);
    assert!(app.tick().is_some());
    assert_eq!(app.mode().name(), "death");

    app.handle(Action::Confirm);
    let game = game_of(&app);
    assert_eq!(game.score(), 0);
    assert_eq!(game.snake().len(), 5);
    assert_eq!(game.food().len(), 1);
    assert!(!game.snake().occupies(game.food()[0]));
}

#[test]
fn test_death_score_lands_on_scores_page() {
    let mut app = App::with_seed(
        Settings::default(),
        vec![LeaderboardItem::new("01/01/2024, 10:00:00", 7)],
        Bounds::new(10, 20),
        1,
    );
    app.handle(Action::Confirm);
    let score = loop {
        if let Some(Effect::RecordScore(score)) = app.tick() {
            break score;
        }
    };
    app.record_score(LeaderboardItem::new("01/02/2024, 10:00:00", score));
    assert_eq!(app.leaderboard().len(), 2);
    assert!(app.leaderboard().windows(2).all(|w| w[0].score >= w[1].score));

    app.handle(Action::Menu);
    app.handle(Action::Down);
    app.handle(Action::Down);
    app.handle(Action::Confirm);
    assert_eq!(app.mode().name(), "menu.scores");
}

#[test]
fn test_snake_never_reverses_onto_itself() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = SnakeGame::with_rng(
        Settings::default(),
        Bounds::new(15, 30),
        StdRng::seed_from_u64(11),
    );

    let mut last_move: Option<Direction> = None;
    for _ in 0..2_000 {
        // Several steering requests may land within one tick.
        for _ in 0..rng.gen_range(0..3) {
            let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            game.set_direction(dir);
        }

        let before = game.snake().head();
        let planned = game.direction();
        match game.advance() {
            TickResult::Collided => {
                game.reset(Settings::default());
                last_move = None;
            }
            _ => {
                assert_eq!(game.snake().head(), before.step(planned));
                if let Some(prev) = last_move {
                    assert_ne!(planned, prev.opposite());
                }
                last_move = Some(planned);
            }
        }
    }
}
