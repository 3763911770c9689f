//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the simulation, the terminal
//! views and the persistence layer alike.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs inside the *playable area*, i.e. the
//! terminal surface with the one-cell border removed. `(0, 0)` is the top-left
//! playable cell; the renderer adds the border offset.
//!
//! # Settings
//!
//! | Field | Default | Floor | Ceiling |
//! |-------|---------|-------|---------|
//! | `init_length` | 5 | 4 | 1000 |
//! | `growth_size` | 1 | 1 | 1000 |
//! | `speed` | 2 | 1 | 100 |
//! | `acceleration` | 1 | 1 | 10 |
//! | `food_count` | 1 | 1 | 100 |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, SettingField, Settings};
//!
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//! assert_eq!(Direction::from_code(2), Some(Direction::Up));
//!
//! let p = Position::new(3, 4).step(Direction::Down);
//! assert_eq!(p, Position::new(4, 4));
//!
//! let s = Settings::default().adjusted(SettingField::Speed, 1);
//! assert_eq!(s.speed, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Minimum terminal width (columns) needed for the menu and a usable field.
pub const MIN_COLS: u16 = 40;

/// Minimum terminal height (rows).
pub const MIN_ROWS: u16 = 12;

/// Number of leaderboard entries shown on the scores screen.
pub const LEADERBOARD_DISPLAY: usize = 5;

/// Format of leaderboard timestamps (`MM/DD/YYYY, HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Heading of the snake.
///
/// The numeric codes (0-3) follow the order of the head glyphs:
/// Right, Left, Up, Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn code(&self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Right),
            1 => Some(Direction::Left),
            2 => Some(Direction::Up),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Right/Left. Terminal glyphs are taller than wide, so horizontal moves
    /// are paced differently.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// `(d_row, d_col)` for one step.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

/// A cell in the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `dir` (may fall outside the playable area).
    pub fn step(&self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Extents of the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub rows: i16,
    pub cols: i16,
}

impl Bounds {
    pub const fn new(rows: i16, cols: i16) -> Self {
        Self { rows, cols }
    }

    /// Playable area of a terminal of the given size (border cells removed).
    pub fn from_terminal(width: u16, height: u16) -> Self {
        let rows = height.saturating_sub(2).min(i16::MAX as u16) as i16;
        let cols = width.saturating_sub(2).min(i16::MAX as u16) as i16;
        Self { rows, cols }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    pub fn area(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// All playable cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}

/// Logical input, independent of the terminal key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Menu,
    Pause,
    Quit,
}

impl Action {
    /// Directional actions map onto a heading.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Tuning parameters, persisted as a flat JSON object.
///
/// Values are immutable snapshots: editing goes through [`Settings::adjusted`]
/// which returns a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub init_length: u32,
    pub growth_size: u32,
    pub speed: u32,
    pub acceleration: u32,
    pub food_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            init_length: 5,
            growth_size: 1,
            speed: 2,
            acceleration: 1,
            food_count: 1,
        }
    }
}

impl Settings {
    pub fn get(&self, field: SettingField) -> u32 {
        match field {
            SettingField::InitLength => self.init_length,
            SettingField::GrowthSize => self.growth_size,
            SettingField::Speed => self.speed,
            SettingField::Acceleration => self.acceleration,
            SettingField::FoodCount => self.food_count,
        }
    }

    /// Copy with `field` moved by `delta`, clamped to the field's range.
    pub fn adjusted(&self, field: SettingField, delta: i32) -> Self {
        let current = self.get(field) as i64;
        let value =
            (current + delta as i64).clamp(field.floor() as i64, field.ceiling() as i64) as u32;
        let mut next = *self;
        match field {
            SettingField::InitLength => next.init_length = value,
            SettingField::GrowthSize => next.growth_size = value,
            SettingField::Speed => next.speed = value,
            SettingField::Acceleration => next.acceleration = value,
            SettingField::FoodCount => next.food_count = value,
        }
        next
    }

    /// Copy with every field clamped into its range.
    pub fn sanitized(&self) -> Self {
        SettingField::ALL
            .iter()
            .fold(*self, |acc, &field| acc.adjusted(field, 0))
    }
}

/// Editable settings fields, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    InitLength,
    GrowthSize,
    Speed,
    Acceleration,
    FoodCount,
}

impl SettingField {
    pub const ALL: [SettingField; 5] = [
        SettingField::InitLength,
        SettingField::GrowthSize,
        SettingField::Speed,
        SettingField::Acceleration,
        SettingField::FoodCount,
    ];

    pub fn floor(&self) -> u32 {
        match self {
            SettingField::InitLength => 4,
            _ => 1,
        }
    }

    /// Largest accepted value.
    pub fn ceiling(&self) -> u32 {
        match self {
            SettingField::InitLength | SettingField::GrowthSize => 1000,
            SettingField::Speed | SettingField::FoodCount => 100,
            SettingField::Acceleration => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingField::InitLength => "Initial snake length",
            SettingField::GrowthSize => "Growth size",
            SettingField::Speed => "Speed",
            SettingField::Acceleration => "Acceleration",
            SettingField::FoodCount => "Food count",
        }
    }
}

/// One finished game on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardItem {
    #[serde(rename = "time")]
    pub timestamp: String,
    pub score: u32,
}

impl LeaderboardItem {
    pub fn new(timestamp: impl Into<String>, score: u32) -> Self {
        Self {
            timestamp: timestamp.into(),
            score,
        }
    }
}
