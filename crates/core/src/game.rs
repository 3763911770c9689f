//! Game simulation - one session of Snake
//!
//! Owns the snake, the food on the board, the score and the settings snapshot
//! taken when the session (re)started. The simulation knows nothing about the
//! terminal: walls are the edges of [`Bounds`] and collisions are checked
//! against the body model directly.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::food::place_food;
use crate::snake::Snake;
use crate::types::{Bounds, Direction, Position, Settings};

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Moved onto an empty cell.
    Continue,
    /// Moved onto food: score +1, body grew.
    Ate,
    /// Head would hit a wall or the body. Nothing moved.
    Collided,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    settings: Settings,
    bounds: Bounds,
    snake: Snake,
    food: Vec<Position>,
    score: u32,
    /// Tail cell freed by the last tick, if no segment still covers it.
    vacated: Option<Position>,
    rng: StdRng,
}

impl SnakeGame {
    /// Start a session seeded from OS entropy.
    pub fn new(settings: Settings, bounds: Bounds) -> Self {
        Self::with_rng(settings, bounds, StdRng::from_entropy())
    }

    pub fn with_rng(settings: Settings, bounds: Bounds, rng: StdRng) -> Self {
        let mut game = Self {
            settings,
            bounds,
            snake: Snake::spawn(Position::new(0, 0), 1, Direction::Right),
            food: Vec::new(),
            score: 0,
            vacated: None,
            rng,
        };
        game.reset(settings);
        game
    }

    /// Session with an explicit snake and food layout.
    ///
    /// Used for scripted scenarios and benchmarks; no randomness is consumed
    /// until food is eaten.
    pub fn with_layout(
        settings: Settings,
        bounds: Bounds,
        snake: Snake,
        food: Vec<Position>,
        rng: StdRng,
    ) -> Self {
        Self {
            settings,
            bounds,
            snake,
            food,
            score: 0,
            vacated: None,
            rng,
        }
    }

    /// Reinitialise the session with a fresh settings snapshot.
    ///
    /// The head lands on a random cell. On each axis the candidate heading
    /// points away from the nearer edge; one of the two candidates is then
    /// picked at random.
    pub fn reset(&mut self, settings: Settings) {
        self.reset_with_bounds(settings, self.bounds);
    }

    /// [`SnakeGame::reset`] onto a playable area of a different size.
    pub fn reset_with_bounds(&mut self, settings: Settings, bounds: Bounds) {
        self.bounds = bounds;
        self.settings = settings.sanitized();
        self.score = 0;
        self.vacated = None;

        let rows = self.bounds.rows.max(1);
        let cols = self.bounds.cols.max(1);
        let head = Position::new(self.rng.gen_range(0..rows), self.rng.gen_range(0..cols));

        let vertical = if rows - 1 - head.row >= rows / 2 {
            Direction::Down
        } else {
            Direction::Up
        };
        let horizontal = if cols - 1 - head.col >= cols / 2 {
            Direction::Right
        } else {
            Direction::Left
        };
        let direction = if self.rng.gen_bool(0.5) {
            vertical
        } else {
            horizontal
        };

        self.snake = Snake::spawn(head, self.settings.init_length as usize, direction);
        self.food.clear();
        for _ in 0..self.settings.food_count {
            if !self.spawn_food() {
                break;
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }

    /// Steer the snake.
    ///
    /// Ignored when `dir` opposes the pending heading or the heading of the
    /// last executed move. Returns whether the heading changed.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        self.snake.set_direction(dir)
    }

    /// Advance the simulation by one cell.
    pub fn advance(&mut self) -> TickResult {
        self.vacated = None;

        let new_head = self.snake.next_head();
        if self.snake.would_collide(new_head, self.bounds) {
            return TickResult::Collided;
        }

        let old_tail = self.snake.shift_to(new_head);
        if !self.snake.occupies(old_tail) {
            self.vacated = Some(old_tail);
        }

        let Some(idx) = self.food.iter().position(|&f| f == new_head) else {
            return TickResult::Continue;
        };

        self.score += 1;
        self.snake.grow(self.settings.growth_size as usize);
        self.food.swap_remove(idx);
        self.spawn_food();
        TickResult::Ate
    }

    /// Delay before the next tick: `1 / (speed * acceleration)` seconds,
    /// halved while heading horizontally.
    pub fn tick_interval(&self) -> Duration {
        let rate = (self.settings.speed.max(1) as f64) * (self.settings.acceleration.max(1) as f64);
        let secs = 1.0 / rate;
        if self.direction().is_horizontal() {
            Duration::from_secs_f64(secs / 2.0)
        } else {
            Duration::from_secs_f64(secs)
        }
    }

    fn spawn_food(&mut self) -> bool {
        let snake = &self.snake;
        let food = &self.food;
        let placed = place_food(&mut self.rng, self.bounds, |p| {
            snake.occupies(p) || food.contains(&p)
        });
        match placed {
            Some(pos) => {
                self.food.push(pos);
                true
            }
            None => false,
        }
    }
}
