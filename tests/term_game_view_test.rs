use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_snake::core::{App, Snake, SnakeGame};
use tui_snake::term::{
    encode_frame_into, render_app, screen_cell, FrameBuffer, GameView, Viewport, BODY_GLYPH,
    FOOD_GLYPH,
};
use tui_snake::types::{Action, Bounds, Direction, Position, Settings};

fn scripted_game() -> SnakeGame {
    let body = [
        Position::new(4, 6),
        Position::new(4, 5),
        Position::new(4, 4),
    ];
    SnakeGame::with_layout(
        Settings::default(),
        Bounds::new(10, 20),
        Snake::from_segments(body, Direction::Right).unwrap(),
        vec![Position::new(8, 15)],
        StdRng::seed_from_u64(1),
    )
}

fn glyph(fb: &FrameBuffer, pos: Position) -> char {
    let (x, y) = screen_cell(pos).unwrap();
    fb.glyph_at(x, y).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&scripted_game(), false, Viewport::new(22, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');
    assert!(fb.row_text(0).contains(" Score: 0 "));
}

#[test]
fn term_view_draws_snake_and_food_inside_border() {
    let fb = GameView::default().render(&scripted_game(), false, Viewport::new(22, 12));

    assert_eq!(glyph(&fb, Position::new(4, 6)), '▹');
    assert_eq!(glyph(&fb, Position::new(4, 5)), BODY_GLYPH);
    assert_eq!(glyph(&fb, Position::new(4, 4)), BODY_GLYPH);
    assert_eq!(glyph(&fb, Position::new(8, 15)), FOOD_GLYPH);
    assert_eq!(glyph(&fb, Position::new(0, 0)), ' ');
}

#[test]
fn term_view_clears_vacated_tail_cell() {
    let mut game = scripted_game();
    let view = GameView::default();
    let vp = Viewport::new(22, 12);
    let before = view.render(&game, false, vp);

    game.advance();
    assert_eq!(game.vacated(), Some(Position::new(4, 4)));
    let after = view.render(&game, false, vp);

    assert_eq!(glyph(&after, Position::new(4, 4)), ' ');
    assert_eq!(glyph(&after, Position::new(4, 7)), '▹');

    let mut out = Vec::new();
    encode_frame_into(Some(&before), &after, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn term_view_shows_pause_banner() {
    let fb = GameView::default().render(&scripted_game(), true, Viewport::new(40, 12));
    assert!(fb.row_text(11).contains("Paused. Press P to continue."));
}

#[test]
fn term_screen_follows_app_mode() {
    let vp = Viewport::new(40, 12);
    let bounds = Bounds::from_terminal(vp.width, vp.height);
    let mut app = App::with_seed(Settings::default(), Vec::new(), bounds, 3);

    let text = |app: &App| -> String {
        let fb = render_app(app, vp);
        (0..vp.height).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
    };

    let menu = text(&app);
    for label in ["Play", "Settings", "Scores", "Exit"] {
        assert!(menu.contains(label), "missing {label}");
    }

    app.handle(Action::Down);
    app.handle(Action::Confirm);
    let settings = text(&app);
    assert!(settings.contains("Initial snake length: 5"));
    assert!(settings.contains("Back"));

    app.handle(Action::Up);
    app.handle(Action::Confirm);
    app.handle(Action::Confirm);
    assert!(text(&app).contains("Score: 0"));
}
