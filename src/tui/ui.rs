//! Stateless rendering helpers for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_engine::{Coord, GameEngine, PlayerColor};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Maps a player's colour token to a terminal colour.
pub fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Black => Color::Reset,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Red => Color::Red,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::White => Color::White,
    }
}

/// Alternates `cell` and one-line separators: `cell, 1, cell, 1, ..., cell`.
fn grid_constraints(size: usize, cell: u16) -> Vec<Constraint> {
    (0..size)
        .flat_map(|i| {
            let sep = (i > 0).then_some(Constraint::Length(1));
            sep.into_iter().chain([Constraint::Length(cell)])
        })
        .collect()
}

/// Space taken by `size` cells plus separators, saturating at `u16::MAX`.
fn grid_extent(size: usize, cell: u16) -> u16 {
    u16::try_from(size)
        .unwrap_or(u16::MAX)
        .saturating_mul(cell.saturating_add(1))
}

/// Renders the board with cursor and winning-line highlight.
pub fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Coord) {
    let size = engine.board_size();
    let width = grid_extent(size, CELL_WIDTH);
    let height = grid_extent(size, CELL_HEIGHT);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(size, CELL_HEIGHT))
        .split(board_area);

    for (row, cells) in engine.board().rows().enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(grid_constraints(size, CELL_WIDTH))
            .split(rows[row * 2]);
        for (col, _) in cells.iter().enumerate() {
            if col > 0 {
                draw_separator_vertical(frame, cols[col * 2 - 1]);
            }
            draw_cell(frame, cols[col * 2], engine, cursor, (row, col));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Coord, pos: Coord) {
    let size = engine.board_size();
    let label = engine.board().label(pos).unwrap_or_default();

    let (symbol, mut style) = if label.is_empty() {
        // Digit hints only where digit keys work.
        let hint = if size <= 3 {
            (pos.0 * size + pos.1 + 1).to_string()
        } else {
            String::new()
        };
        (hint, Style::default().fg(Color::DarkGray))
    } else {
        let color = engine
            .players()
            .iter()
            .find(|p| p.label() == label)
            .map(|p| player_color(*p.color()))
            .unwrap_or(Color::Reset);
        (
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    if engine.winner_combo().contains(&pos) {
        style = style.bg(Color::Red);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the mark inside the cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Returns a `width`×`height` rectangle centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
