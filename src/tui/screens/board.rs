//! Board screen: the game itself.
//!
//! Translates key presses into engine moves and renders whatever the engine
//! reports: whose turn it is, the winner with the winning line highlighted,
//! or a tie.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Coord, GameEngine, PlayOutcome};
use tracing::{debug, info, instrument};

use crate::tui::input::{digit_to_cell, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_board, player_color};

/// In-game screen owning the engine for one session.
#[derive(Debug, Getters)]
pub struct BoardScreen {
    engine: GameEngine,
    cursor: Coord,
}

impl BoardScreen {
    /// Creates a board screen with the cursor in the middle of the board.
    #[instrument(skip(engine), fields(size = engine.board_size()))]
    pub fn new(engine: GameEngine) -> Self {
        let mid = engine.board_size() / 2;
        Self {
            engine,
            cursor: (mid, mid),
        }
    }

    /// Returns the status line and its colour.
    pub fn status(&self) -> (String, Color) {
        if self.engine.is_tied() {
            ("Tie!".to_string(), Color::Red)
        } else if self.engine.has_winner() {
            let winner = self
                .engine
                .winner()
                .unwrap_or_else(|| self.engine.current_player());
            (
                format!("{} wins!", winner.name()),
                player_color(*winner.color()),
            )
        } else {
            (
                format!("Turn of {}", self.engine.current_player().name()),
                Color::Reset,
            )
        }
    }

    /// Plays the current player's mark at `pos`.
    #[instrument(skip(self))]
    fn play(&mut self, pos: Coord) {
        match self.engine.play(pos.0, pos.1) {
            PlayOutcome::Rejected => debug!("Click ignored"),
            PlayOutcome::Continue { next } => debug!(next = %next, "Turn passed"),
            PlayOutcome::Won { winner, combo } => {
                info!(winner = %winner, line = %combo.kind(), "Game won")
            }
            PlayOutcome::Tied => info!("Game tied"),
        }
    }

    /// Starts a new game on the same screen.
    #[instrument(skip(self))]
    fn play_again(&mut self) {
        self.engine.reset();
        let mid = self.engine.board_size() / 2;
        self.cursor = (mid, mid);
    }
}

impl Screen for BoardScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let (message, color) = self.status();
        let status = Paragraph::new(message)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[1]);

        draw_board(frame, chunks[2], &self.engine, self.cursor);

        let help_text = if self.engine.board_size() <= 3 {
            "←↑↓→: Move | Enter/1-9: Play | R: Play again | Q: Quit"
        } else {
            "←↑↓→: Move | Enter: Play | R: Play again | Q: Quit"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let size = self.engine.board_size();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.play_again();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_to_cell(c, size) {
                    self.cursor = pos;
                    self.play(pos);
                }
                ScreenTransition::Stay
            }
            code => {
                self.cursor = move_cursor(self.cursor, code, size);
                ScreenTransition::Stay
            }
        }
    }
}
