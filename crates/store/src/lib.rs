//! Persistence for settings and the leaderboard.
//!
//! Both stores are small JSON files that are read or rewritten whole in a
//! single operation. Reads never fail: a missing, empty or unparsable file is
//! logged and replaced by defaults. Writes overwrite the file and report
//! errors to the caller.
//!
//! # Environment Variables
//!
//! - `SNAKE_SETTINGS_PATH`: settings file (default: `settings.json`)
//! - `SNAKE_SCORES_PATH`: leaderboard file (default: `leaderboard.json`)

pub mod config;
pub mod leaderboard;
pub mod settings;

pub use tui_snake_types as types;

pub use config::StoreConfig;
pub use leaderboard::{read_leaderboard, timestamp_now, write_leaderboard};
pub use settings::{ensure_settings, load_settings, read_settings, write_settings};
