//! Board rendering: an N×N grid with the winning line highlighted.

use crate::app::App;
use gridtac::{Board, GameStatus, Player, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 1;

/// Renders the current board snapshot.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let board = session.board();
    let n = session.size() as u16;
    let winning = match session.status() {
        GameStatus::Won { line, .. } => line,
        _ => Vec::new(),
    };

    // Cells interleaved with one-character separators.
    let width = n * CELL_WIDTH + (n - 1);
    let height = n * CELL_HEIGHT + (n - 1);
    let board_area = center_rect(area, width, height);

    let mut row_constraints = Vec::new();
    for i in 0..(2 * n - 1) {
        row_constraints.push(if i % 2 == 0 {
            Constraint::Length(CELL_HEIGHT)
        } else {
            Constraint::Length(1)
        });
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(board_area);

    for row in 0..n as usize {
        render_row(f, rows[2 * row], board, row, &winning, app.cursor_index());
        if row + 1 < n as usize {
            render_separator(f, rows[2 * row + 1], n as usize);
        }
    }
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    winning: &[usize],
    cursor: usize,
) {
    let n = board.size();
    let mut col_constraints = Vec::new();
    for i in 0..(2 * n - 1) {
        col_constraints.push(if i % 2 == 0 {
            Constraint::Length(CELL_WIDTH)
        } else {
            Constraint::Length(1)
        });
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(col_constraints)
        .split(area);

    for col in 0..n {
        let index = row * n + col;
        render_square(f, cols[2 * col], board, index, winning, cursor);
        if col + 1 < n {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            f.render_widget(sep, cols[2 * col + 1]);
        }
    }
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    index: usize,
    winning: &[usize],
    cursor: usize,
) {
    let (text, mut style) = match board.get(index) {
        Some(Square::Occupied(Player::X)) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => ("·", Style::default().fg(Color::DarkGray)),
    };
    if winning.contains(&index) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if index == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, n: usize) {
    let line = vec!["─".repeat(CELL_WIDTH as usize); n].join("┼");
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
