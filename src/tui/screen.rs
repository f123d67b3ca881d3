//! Screen trait and transition type for the UI state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](super::Controller) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a game with the entered names, in turn order.
    StartGame {
        /// Names typed by the players; blank entries keep the configured name.
        names: Vec<String>,
    },
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
