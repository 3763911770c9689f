//! Terminal Snake runner.
//!
//! Owns the terminal and the clock. Menu and game-over screens block on input;
//! a running game polls input with a timeout until the next tick is due.

mod logging;

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_snake::core::{App, Effect, Pacing};
use tui_snake::input::handle_key_event;
use tui_snake::store::{
    ensure_settings, read_leaderboard, timestamp_now, write_leaderboard, write_settings,
    StoreConfig,
};
use tui_snake::term::{render_app, TerminalRenderer, Viewport};
use tui_snake::types::{Action, Bounds, LeaderboardItem, MIN_COLS, MIN_ROWS};

fn main() -> Result<()> {
    logging::init()?;
    let config = StoreConfig::from_env();

    let mut term = TerminalRenderer::new();
    let (width, height) = term.size()?;
    if width < MIN_COLS || height < MIN_ROWS {
        bail!("terminal is {width}x{height}, at least {MIN_COLS}x{MIN_ROWS} is required");
    }

    info!(width, height, settings = %config.settings_path.display(), "starting");
    term.enter()?;

    let result = run(&mut term, &config, Viewport::new(width, height));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &StoreConfig, mut viewport: Viewport) -> Result<()> {
    let settings = ensure_settings(&config.settings_path);
    let leaderboard = read_leaderboard(&config.scores_path);
    let mut app = App::new(
        settings,
        leaderboard,
        Bounds::from_terminal(viewport.width, viewport.height),
    );

    let mut last_tick = Instant::now();
    let mut ticking = false;

    while app.is_running() {
        term.draw(&render_app(&app, viewport))?;

        match app.pacing() {
            Pacing::Blocking => {
                ticking = false;
                if let Some(action) = next_action(None, term, &mut app, &mut viewport)? {
                    if let Some(effect) = app.handle(action) {
                        apply(&mut app, config, effect);
                    }
                }
            }
            Pacing::Tick(interval) => {
                if !ticking {
                    ticking = true;
                    last_tick = Instant::now();
                }

                let timeout = interval.saturating_sub(last_tick.elapsed());
                if let Some(action) = next_action(Some(timeout), term, &mut app, &mut viewport)? {
                    if let Some(effect) = app.handle(action) {
                        apply(&mut app, config, effect);
                    }
                }

                if last_tick.elapsed() >= interval {
                    last_tick = Instant::now();
                    if let Some(effect) = app.tick() {
                        apply(&mut app, config, effect);
                    }
                }
            }
        }
    }

    info!("exiting");
    Ok(())
}

/// Wait for one input event, up to `timeout` (forever with `None`).
///
/// Resizes update the viewport and the playable area for the next game.
fn next_action(
    timeout: Option<Duration>,
    term: &mut TerminalRenderer,
    app: &mut App,
    viewport: &mut Viewport,
) -> Result<Option<Action>> {
    if let Some(timeout) = timeout {
        if !event::poll(timeout)? {
            return Ok(None);
        }
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
        Event::Resize(width, height) => {
            *viewport = Viewport::new(width, height);
            app.set_bounds(Bounds::from_terminal(width, height));
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn apply(app: &mut App, config: &StoreConfig, effect: Effect) {
    match effect {
        Effect::SaveSettings(settings) => {
            if let Err(err) = write_settings(&config.settings_path, &settings) {
                warn!(error = %err, "could not save settings");
            }
        }
        Effect::RecordScore(score) => {
            info!(score, "game over");
            let list = app.record_score(LeaderboardItem::new(timestamp_now(), score));
            if let Err(err) = write_leaderboard(&config.scores_path, list) {
                warn!(error = %err, "could not save leaderboard");
            }
        }
    }
}
