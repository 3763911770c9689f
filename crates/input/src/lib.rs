//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Action`]s. The mapping is
//! the same for every screen; each mode decides what an action means.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
