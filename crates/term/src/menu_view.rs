//! Text screens: menu pages and the game-over screen.

use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::Viewport;

#[derive(Default)]
pub struct MenuView {
    text: CellStyle,
}

impl MenuView {
    /// Vertically centered rows, the selected one drawn reversed.
    pub fn render_rows(&self, rows: &[String], selected: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.draw_border(self.text);

        let top = (viewport.height / 2).saturating_sub(rows.len() as u16 / 2);
        for (i, row) in rows.iter().enumerate() {
            let style = if i == selected {
                self.text.reversed()
            } else {
                self.text
            };
            fb.put_str_centered(top + i as u16, row, style);
        }
        fb
    }

    pub fn render_death(&self, score: u32, viewport: Viewport) -> FrameBuffer {
        let lines = [
            format!("You got {} points", score),
            "Press Enter to play again".to_string(),
            "Press Q to quit".to_string(),
            "Press M to go to main menu".to_string(),
        ];

        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.draw_border(self.text);
        let top = (viewport.height / 2).saturating_sub(lines.len() as u16);
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { self.text.bold() } else { self.text };
            fb.put_str_centered(top + i as u16, line, style);
        }
        fb
    }
}
