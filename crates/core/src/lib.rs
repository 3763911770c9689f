//! Core game logic module - pure and testable
//!
//! This crate contains the Snake rules, the menu pages and the mode state
//! machine. It has no dependencies on the terminal or the filesystem:
//!
//! - **Testable**: randomness comes from an injectable `StdRng`
//! - **Portable**: runs headless; views and persistence live in other crates
//!
//! # Module Structure
//!
//! - [`snake`]: body model, heading rules, collision test
//! - [`food`]: bounded rejection sampling for free cells
//! - [`game`]: one game session (`reset`, `set_direction`, `advance`, `tick_interval`)
//! - [`leaderboard`]: descending score ranking
//! - [`menu`]: cursor state and labels for the Main / Settings / Scores pages
//! - [`app`]: the mode state machine driving everything above
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{App, Mode};
//! use tui_snake_types::{Action, Bounds, Settings};
//!
//! let mut app = App::with_seed(Settings::default(), Vec::new(), Bounds::new(20, 60), 1);
//! app.handle(Action::Confirm); // "Play"
//! assert!(matches!(app.mode(), Mode::Game(_)));
//!
//! app.handle(Action::Quit);
//! assert!(!app.is_running());
//! ```
//!
//! # Timing
//!
//! A game ticks every `1 / (speed * acceleration)` seconds, twice as often
//! while heading horizontally. The caller owns the clock: poll input until
//! [`App::pacing`] says a tick is due, then call [`App::tick`].

pub mod app;
pub mod food;
pub mod game;
pub mod leaderboard;
pub mod menu;
pub mod snake;

pub use tui_snake_types as types;

pub use app::{App, DeathScreen, Effect, GameSession, MenuPage, Mode, Pacing};
pub use food::place_food;
pub use game::{SnakeGame, TickResult};
pub use menu::{MainMenu, MainOption, MenuRows, ScoresMenu, SettingsMenu};
pub use snake::Snake;
