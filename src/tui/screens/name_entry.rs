//! Name entry screen: players type their names before the first game.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::config::PlayerEntry;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the name entry screen.
///
/// One input per configured player. Blank inputs fall back to the
/// configured name when the game starts.
#[derive(Debug, Getters)]
pub struct NameEntryScreen {
    /// Configured names and labels, shown as placeholders.
    placeholders: Vec<(String, String)>,
    inputs: Vec<String>,
    focus: usize,
}

impl NameEntryScreen {
    /// Creates a name entry screen for the given players.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(players: &[PlayerEntry]) -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            placeholders: players
                .iter()
                .map(|p| (p.name().clone(), p.label().clone()))
                .collect(),
            inputs: vec![String::new(); players.len()],
            focus: 0,
        }
    }

    fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + 1) % self.inputs.len();
        }
    }

    fn focus_previous(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
        }
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(self.inputs.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let title = Paragraph::new("Tic-Tac-Toe - Enter Player Names")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        for (i, (input, (default_name, label))) in
            self.inputs.iter().zip(&self.placeholders).enumerate()
        {
            let focused = i == self.focus;
            let (text, style) = if input.is_empty() {
                (default_name.as_str(), Style::default().fg(Color::DarkGray))
            } else {
                (input.as_str(), Style::default().fg(Color::White))
            };
            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let field = Paragraph::new(text).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!("Player {} ({})", i + 1, label)),
            );
            frame.render_widget(field, chunks[i + 1]);
        }

        let help = Paragraph::new("Type name | Tab/↑↓: Switch | Enter: Next / Start | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[chunks.len() - 1]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(input) = self.inputs.get_mut(self.focus) {
                    input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                if let Some(input) = self.inputs.get_mut(self.focus) {
                    input.pop();
                }
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                ScreenTransition::Stay
            }
            KeyCode::Enter if self.focus + 1 < self.inputs.len() => {
                self.focus += 1;
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                info!(names = ?self.inputs, "Names entered");
                ScreenTransition::StartGame {
                    names: self.inputs.clone(),
                }
            }
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
