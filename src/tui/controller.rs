//! Controller: the state machine driving the terminal UI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::config::{ConfigError, GameConfig};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BoardScreen, NameEntryScreen};

/// Active screen in the UI state machine.
#[derive(Debug)]
pub(crate) enum ActiveScreen {
    NameEntry(NameEntryScreen),
    Board(BoardScreen),
}

impl ActiveScreen {
    fn render(&self, frame: &mut Frame) {
        match self {
            ActiveScreen::NameEntry(s) => s.render(frame),
            ActiveScreen::Board(s) => s.render(frame),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match self {
            ActiveScreen::NameEntry(s) => s.handle_key(key),
            ActiveScreen::Board(s) => s.handle_key(key),
        }
    }
}

/// Controller that drives the screens.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct Controller {
    config: GameConfig,
    skip_names: bool,
}

impl Controller {
    /// Creates a new controller.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig, skip_names: bool) -> Self {
        info!("Creating Controller");
        Self { config, skip_names }
    }

    /// Builds the screen shown at startup.
    #[instrument(skip(self))]
    pub(crate) fn first_screen(&self) -> Result<ActiveScreen, ConfigError> {
        if self.skip_names {
            let engine = self.config.build_engine()?;
            Ok(ActiveScreen::Board(BoardScreen::new(engine)))
        } else {
            Ok(ActiveScreen::NameEntry(NameEntryScreen::new(self.config.players())))
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Input is handled one key at a time; each key is fully processed and
    /// the screen redrawn before the next is read.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        let mut screen = self.first_screen()?;

        loop {
            terminal.draw(|f| screen.render(f))?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let transition = screen.handle_key(key);
            screen = match self.apply_transition(transition, screen)? {
                Some(next) => next,
                None => {
                    info!("Quitting");
                    return Ok(());
                }
            };
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    pub(crate) fn apply_transition(
        &self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Result<Option<ActiveScreen>, ConfigError> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Ok(Some(current)),
            ScreenTransition::StartGame { names } => {
                let mut config = self.config.clone();
                config.rename_players(&names);
                let engine = config.build_engine()?;
                info!(first = %engine.current_player(), "Starting game");
                Ok(Some(ActiveScreen::Board(BoardScreen::new(engine))))
            }
            ScreenTransition::Quit => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(screen: &mut ActiveScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_on_name_entry() {
        let controller = Controller::new(GameConfig::default(), false);
        assert!(matches!(
            controller.first_screen().unwrap(),
            ActiveScreen::NameEntry(_)
        ));
    }

    #[test]
    fn test_skip_names_starts_on_board() {
        let controller = Controller::new(GameConfig::default(), true);
        match controller.first_screen().unwrap() {
            ActiveScreen::Board(s) => {
                assert_eq!(s.engine().current_player().name(), "Player 1");
            }
            other => panic!("expected board, got {other:?}"),
        }
    }

    #[test]
    fn test_names_flow_into_engine() {
        let controller = Controller::new(GameConfig::default(), false);
        let mut screen = controller.first_screen().unwrap();
        for c in "Ana".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
        let transition = press(&mut screen, KeyCode::Enter);
        assert_eq!(
            transition,
            ScreenTransition::StartGame {
                names: vec!["Ana".to_string(), String::new()]
            }
        );

        let next = controller
            .apply_transition(transition, screen)
            .unwrap()
            .unwrap();
        match next {
            ActiveScreen::Board(s) => {
                let players = s.engine().players();
                assert_eq!(players[0].name(), "Ana");
                assert_eq!(players[1].name(), "Player 2");
            }
            other => panic!("expected board, got {other:?}"),
        }
    }

    #[test]
    fn test_quit_ends_loop() {
        let controller = Controller::new(GameConfig::default(), true);
        let mut screen = controller.first_screen().unwrap();
        let transition = press(&mut screen, KeyCode::Char('q'));
        assert!(controller.apply_transition(transition, screen).unwrap().is_none());
    }

    #[test]
    fn test_bad_config_surfaces_on_start() {
        let mut config = GameConfig::default();
        config.set_board_size(0);
        let controller = Controller::new(config, true);
        assert!(controller.first_screen().is_err());
    }
}
