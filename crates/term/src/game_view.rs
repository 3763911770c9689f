//! GameView: maps a running [`SnakeGame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The playable area sits inside a one-cell
//! border, so playable `(row, col)` lands on screen cell `(col + 1, row + 1)`.

use crate::core::SnakeGame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Position};

pub const FOOD_GLYPH: char = '@';
pub const BODY_GLYPH: char = '▪';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub fn head_glyph(dir: Direction) -> char {
    match dir {
        Direction::Right => '▹',
        Direction::Left => '◃',
        Direction::Up => '▵',
        Direction::Down => '▿',
    }
}

/// Screen cell of a playable position, if it is representable.
pub fn screen_cell(pos: Position) -> Option<(u16, u16)> {
    let x = u16::try_from(pos.col).ok()?.checked_add(1)?;
    let y = u16::try_from(pos.row).ok()?.checked_add(1)?;
    Some((x, y))
}

pub struct GameView {
    border: CellStyle,
    food: CellStyle,
    head: CellStyle,
    body: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            border: CellStyle::default(),
            food: CellStyle::fg(Rgb::new(240, 220, 80)),
            head: CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            body: CellStyle::fg(Rgb::new(100, 220, 120)),
        }
    }
}

impl GameView {
    pub fn render(&self, game: &SnakeGame, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, paused, &mut fb);
        fb
    }

    pub fn render_into(&self, game: &SnakeGame, paused: bool, fb: &mut FrameBuffer) {
        fb.clear();
        fb.draw_border(self.border);
        fb.put_str(2, 0, &format!(" Score: {} ", game.score()), self.border.bold());

        for &pos in game.food() {
            if let Some((x, y)) = screen_cell(pos) {
                fb.put_char(x, y, FOOD_GLYPH, self.food);
            }
        }

        // Tail first so the head wins where segments are stacked.
        let snake = game.snake();
        for &pos in snake.body().iter().skip(1).rev() {
            if let Some((x, y)) = screen_cell(pos) {
                fb.put_char(x, y, BODY_GLYPH, self.body);
            }
        }
        if let Some((x, y)) = screen_cell(snake.head()) {
            fb.put_char(x, y, head_glyph(game.direction()), self.head);
        }

        if paused {
            let bottom = fb.height().saturating_sub(1);
            fb.put_str(1, bottom, "Paused. Press P to continue.", self.border.bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_cell_offsets_border() {
        assert_eq!(screen_cell(Position::new(0, 0)), Some((1, 1)));
        assert_eq!(screen_cell(Position::new(3, 7)), Some((8, 4)));
        assert_eq!(screen_cell(Position::new(-1, 0)), None);
    }

    #[test]
    fn head_glyphs_follow_direction_codes() {
        let glyphs: String = Direction::ALL.iter().map(|d| head_glyph(*d)).collect();
        assert_eq!(glyphs, "▹◃▵▿");
    }
}
