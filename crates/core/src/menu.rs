//! Menu pages: cursor state and row labels.

use arrayvec::ArrayVec;

use crate::leaderboard;
use crate::types::{Action, LeaderboardItem, SettingField, Settings, LEADERBOARD_DISPLAY};

/// Upper bound on rows of any menu page.
pub const MAX_ROWS: usize = 6;

pub type MenuRows = ArrayVec<String, MAX_ROWS>;

/// Move a wrapping cursor for Up/Down. Other actions leave it unchanged.
pub fn step_cursor(selected: usize, len: usize, action: Action) -> usize {
    if len == 0 {
        return 0;
    }
    match action {
        Action::Up => (selected + len - 1) % len,
        Action::Down => (selected + 1) % len,
        _ => selected,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainOption {
    Play,
    Settings,
    Scores,
    Exit,
}

impl MainOption {
    pub const ALL: [MainOption; 4] = [
        MainOption::Play,
        MainOption::Settings,
        MainOption::Scores,
        MainOption::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainOption::Play => "Play",
            MainOption::Settings => "Settings",
            MainOption::Scores => "Scores",
            MainOption::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MainMenu {
    pub selected: usize,
}

impl MainMenu {
    pub fn current(&self) -> MainOption {
        MainOption::ALL[self.selected % MainOption::ALL.len()]
    }

    pub fn navigate(&mut self, action: Action) {
        self.selected = step_cursor(self.selected, MainOption::ALL.len(), action);
    }

    pub fn rows(&self) -> MenuRows {
        MainOption::ALL.iter().map(|o| o.label().to_string()).collect()
    }
}

/// Settings page: one row per field, then "Back".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsMenu {
    pub selected: usize,
}

impl SettingsMenu {
    pub const LEN: usize = SettingField::ALL.len() + 1;

    /// Field under the cursor, or `None` on "Back".
    pub fn field(&self) -> Option<SettingField> {
        SettingField::ALL.get(self.selected).copied()
    }

    pub fn on_back(&self) -> bool {
        self.selected == Self::LEN - 1
    }

    pub fn navigate(&mut self, action: Action) {
        self.selected = step_cursor(self.selected, Self::LEN, action);
    }

    /// New settings for a Left/Right press, or `None` if nothing changes.
    pub fn edit(&self, settings: &Settings, action: Action) -> Option<Settings> {
        let field = self.field()?;
        let delta = match action {
            Action::Right => 1,
            Action::Left => -1,
            _ => return None,
        };
        let next = settings.adjusted(field, delta);
        (next != *settings).then_some(next)
    }

    pub fn rows(&self, settings: &Settings) -> MenuRows {
        let mut rows: MenuRows = SettingField::ALL
            .iter()
            .map(|f| format!("{}: {}", f.label(), settings.get(*f)))
            .collect();
        rows.push("Back".to_string());
        rows
    }
}

/// Scores page: top entries plus "Back", which is always selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoresMenu;

impl ScoresMenu {
    pub fn rows(&self, list: &[LeaderboardItem]) -> MenuRows {
        let mut rows: MenuRows = leaderboard::top(list)
            .iter()
            .take(LEADERBOARD_DISPLAY)
            .map(|item| format!("{}    {}", item.timestamp, item.score))
            .collect();
        rows.push("Back".to_string());
        rows
    }

    pub fn selected(&self, list: &[LeaderboardItem]) -> usize {
        leaderboard::top(list).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps() {
        assert_eq!(step_cursor(0, 4, Action::Up), 3);
        assert_eq!(step_cursor(3, 4, Action::Down), 0);
        assert_eq!(step_cursor(2, 4, Action::Confirm), 2);
    }

    #[test]
    fn main_menu_options_in_order() {
        let mut m = MainMenu::default();
        assert_eq!(m.current(), MainOption::Play);
        m.navigate(Action::Down);
        assert_eq!(m.current(), MainOption::Settings);
        m.navigate(Action::Up);
        m.navigate(Action::Up);
        assert_eq!(m.current(), MainOption::Exit);
    }

    #[test]
    fn settings_edit_clamps_and_reports_change() {
        let menu = SettingsMenu { selected: 0 };
        let s = Settings::default();
        let s = menu.edit(&s, Action::Left).unwrap();
        assert_eq!(s.init_length, 4);
        // Already at the floor.
        assert_eq!(menu.edit(&s, Action::Left), None);
        assert_eq!(menu.edit(&s, Action::Right).unwrap().init_length, 5);
    }

    #[test]
    fn settings_back_row_does_not_edit() {
        let menu = SettingsMenu { selected: SettingsMenu::LEN - 1 };
        assert!(menu.on_back());
        assert_eq!(menu.edit(&Settings::default(), Action::Right), None);
    }

    #[test]
    fn settings_rows_show_values() {
        let rows = SettingsMenu::default().rows(&Settings::default());
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], "Speed: 2");
        assert_eq!(rows[5], "Back");
    }

    #[test]
    fn scores_rows_truncate_to_top_five() {
        let list: Vec<LeaderboardItem> =
            (0..7).rev().map(|s| LeaderboardItem::new("01/01/2024, 00:00:00", s)).collect();
        let page = ScoresMenu;
        let rows = page.rows(&list);
        assert_eq!(rows.len(), 6);
        assert!(rows[0].ends_with(" 6"));
        assert_eq!(page.selected(&list), 5);
        assert_eq!(page.rows(&[]).as_slice(), &["Back".to_string()]);
    }
}
