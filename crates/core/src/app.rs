//! Mode state machine - which screen is active and how it changes
//!
//! [`App`] is the single owner of the active [`Mode`]. Each mode carries only
//! the data it needs; input is dispatched through one `match` and the next
//! mode is returned by value. Side effects that leave the core (persisting
//! settings, recording a score) are handed back to the caller as [`Effect`]s.
//!
//! | From | Trigger | To |
//! |------|---------|----|
//! | Menu.Main | confirm on Play / Settings / Scores / Exit | Game / Menu.Settings / Menu.Scores / Quit |
//! | Menu.Settings | confirm on Back | Menu.Main |
//! | Menu.Scores | confirm | Menu.Main |
//! | Game | collision | Death |
//! | Death | confirm | Game (reset) |
//! | Death | menu key | Menu.Main |
//! | any | quit key | Quit |

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game::{SnakeGame, TickResult};
use crate::leaderboard;
use crate::menu::{MainMenu, MainOption, ScoresMenu, SettingsMenu};
use crate::types::{Action, Bounds, LeaderboardItem, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPage {
    Main(MainMenu),
    Settings(SettingsMenu),
    Scores(ScoresMenu),
}

/// A running game, possibly paused.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub game: SnakeGame,
    pub paused: bool,
}

/// Game-over screen. Keeps the finished session so "play again" can reset it.
#[derive(Debug, Clone)]
pub struct DeathScreen {
    pub game: SnakeGame,
}

impl DeathScreen {
    pub fn score(&self) -> u32 {
        self.game.score()
    }
}

#[derive(Debug, Clone)]
pub enum Mode {
    Menu(MenuPage),
    Game(GameSession),
    Death(DeathScreen),
    Quit,
}

impl Mode {
    pub fn main_menu() -> Self {
        Mode::Menu(MenuPage::Main(MainMenu::default()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu(MenuPage::Main(_)) => "menu.main",
            Mode::Menu(MenuPage::Settings(_)) => "menu.settings",
            Mode::Menu(MenuPage::Scores(_)) => "menu.scores",
            Mode::Game(_) => "game",
            Mode::Death(_) => "death",
            Mode::Quit => "quit",
        }
    }
}

/// Work the caller must do outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Settings changed; persist the new record.
    SaveSettings(Settings),
    /// A game ended with this score; stamp it and call [`App::record_score`].
    RecordScore(u32),
}

/// How the main loop should wait for the next input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Block until a key arrives.
    Blocking,
    /// Poll input, and call [`App::tick`] once this much time has passed.
    Tick(Duration),
}

pub struct App {
    mode: Mode,
    settings: Settings,
    leaderboard: Vec<LeaderboardItem>,
    bounds: Bounds,
    rng: StdRng,
}

impl App {
    pub fn new(settings: Settings, leaderboard: Vec<LeaderboardItem>, bounds: Bounds) -> Self {
        Self::with_rng(settings, leaderboard, bounds, StdRng::from_entropy())
    }

    /// Deterministic variant: every game session is seeded from `seed`.
    pub fn with_seed(
        settings: Settings,
        leaderboard: Vec<LeaderboardItem>,
        bounds: Bounds,
        seed: u64,
    ) -> Self {
        Self::with_rng(settings, leaderboard, bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        settings: Settings,
        leaderboard: Vec<LeaderboardItem>,
        bounds: Bounds,
        rng: StdRng,
    ) -> Self {
        Self {
            mode: Mode::main_menu(),
            settings: settings.sanitized(),
            leaderboard,
            bounds,
            rng,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn leaderboard(&self) -> &[LeaderboardItem] {
        &self.leaderboard
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Playable area for games started from now on.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.mode, Mode::Quit)
    }

    pub fn pacing(&self) -> Pacing {
        match &self.mode {
            Mode::Game(session) if !session.paused => Pacing::Tick(session.game.tick_interval()),
            _ => Pacing::Blocking,
        }
    }

    /// Switch straight into a prepared game session.
    pub fn enter_game_with(&mut self, game: SnakeGame) {
        self.transition(Mode::Game(GameSession { game, paused: false }));
    }

    /// Insert a finished game into the leaderboard; returns the full list to persist.
    pub fn record_score(&mut self, item: LeaderboardItem) -> &[LeaderboardItem] {
        let list = std::mem::take(&mut self.leaderboard);
        self.leaderboard = leaderboard::insert(list, item);
        &self.leaderboard
    }

    /// Dispatch one input to the active mode.
    pub fn handle(&mut self, action: Action) -> Option<Effect> {
        if action == Action::Quit {
            self.transition(Mode::Quit);
            return None;
        }

        let from = self.mode.name();
        let mode = std::mem::replace(&mut self.mode, Mode::Quit);
        let (next, effect) = match mode {
            Mode::Menu(page) => self.handle_menu(page, action),
            Mode::Game(session) => (Mode::Game(Self::handle_game(session, action)), None),
            Mode::Death(screen) => (self.handle_death(screen, action), None),
            Mode::Quit => (Mode::Quit, None),
        };
        self.switch(from, next);
        effect
    }

    /// Advance the running game by one tick.
    pub fn tick(&mut self) -> Option<Effect> {
        let collided = match &mut self.mode {
            Mode::Game(session) if !session.paused => {
                session.game.advance() == TickResult::Collided
            }
            _ => return None,
        };
        if !collided {
            return None;
        }

        match std::mem::replace(&mut self.mode, Mode::Quit) {
            Mode::Game(session) => {
                let score = session.game.score();
                self.switch("game", Mode::Death(DeathScreen { game: session.game }));
                Some(Effect::RecordScore(score))
            }
            other => {
                self.mode = other;
                None
            }
        }
    }

    fn handle_menu(&mut self, page: MenuPage, action: Action) -> (Mode, Option<Effect>) {
        match page {
            MenuPage::Main(mut menu) => {
                if action != Action::Confirm {
                    menu.navigate(action);
                    return (Mode::Menu(MenuPage::Main(menu)), None);
                }
                let next = match menu.current() {
                    MainOption::Play => self.new_game(),
                    MainOption::Settings => Mode::Menu(MenuPage::Settings(SettingsMenu::default())),
                    MainOption::Scores => Mode::Menu(MenuPage::Scores(ScoresMenu)),
                    MainOption::Exit => Mode::Quit,
                };
                (next, None)
            }
            MenuPage::Settings(mut menu) => match action {
                Action::Confirm if menu.on_back() => (Mode::main_menu(), None),
                Action::Left | Action::Right => {
                    let effect = menu.edit(&self.settings, action).map(|next| {
                        self.settings = next;
                        Effect::SaveSettings(next)
                    });
                    (Mode::Menu(MenuPage::Settings(menu)), effect)
                }
                _ => {
                    menu.navigate(action);
                    (Mode::Menu(MenuPage::Settings(menu)), None)
                }
            },
            MenuPage::Scores(page) => match action {
                Action::Confirm => (Mode::main_menu(), None),
                _ => (Mode::Menu(MenuPage::Scores(page)), None),
            },
        }
    }

    fn handle_game(mut session: GameSession, action: Action) -> GameSession {
        if action == Action::Pause {
            session.paused = !session.paused;
        } else if let Some(dir) = action.direction() {
            if !session.paused {
                session.game.set_direction(dir);
            }
        }
        session
    }

    fn handle_death(&mut self, mut screen: DeathScreen, action: Action) -> Mode {
        match action {
            Action::Confirm => {
                screen.game.reset_with_bounds(self.settings, self.bounds);
                Mode::Game(GameSession {
                    game: screen.game,
                    paused: false,
                })
            }
            Action::Menu => Mode::main_menu(),
            _ => Mode::Death(screen),
        }
    }

    fn new_game(&mut self) -> Mode {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        Mode::Game(GameSession {
            game: SnakeGame::with_rng(self.settings, self.bounds, rng),
            paused: false,
        })
    }

    fn transition(&mut self, next: Mode) {
        self.switch(self.mode.name(), next);
    }

    fn switch(&mut self, from: &'static str, next: Mode) {
        if from != next.name() {
            debug!(from, to = next.name(), "mode transition");
        }
        self.mode = next;
    }
}
