//! Terminal rendering module.
//!
//! Views render into a simple framebuffer that the [`TerminalRenderer`]
//! flushes to the terminal, diffing against the previous frame.
//!
//! - `core` stays free of terminal I/O
//! - views are pure and unit-testable
//! - [`FrameBuffer::glyph_at`] reads back what is drawn at any cell

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;
pub mod screen;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{head_glyph, screen_cell, GameView, Viewport, BODY_GLYPH, FOOD_GLYPH};
pub use menu_view::MenuView;
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use screen::render_app;
