//! Top-level dispatch: one frame for whatever mode the app is in.

use crate::core::{App, MenuPage, Mode};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::menu_view::MenuView;

pub fn render_app(app: &App, viewport: Viewport) -> FrameBuffer {
    let menu = MenuView::default();
    match app.mode() {
        Mode::Menu(MenuPage::Main(page)) => menu.render_rows(&page.rows(), page.selected, viewport),
        Mode::Menu(MenuPage::Settings(page)) => {
            menu.render_rows(&page.rows(app.settings()), page.selected, viewport)
        }
        Mode::Menu(MenuPage::Scores(page)) => {
            let list = app.leaderboard();
            menu.render_rows(&page.rows(list), page.selected(list), viewport)
        }
        Mode::Game(session) => GameView::default().render(&session.game, session.paused, viewport),
        Mode::Death(screen) => menu.render_death(screen.score(), viewport),
        Mode::Quit => FrameBuffer::new(viewport.width, viewport.height),
    }
}
