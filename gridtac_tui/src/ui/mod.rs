//! Rendering for the game view.

mod board;
mod moves;

use crate::app::App;
use gridtac::GameStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Draws the whole view: notice region, status line, board, move list,
/// and a help footer.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // transient notice
            Constraint::Length(1), // status line
            Constraint::Min(0),    // board + move list
            Constraint::Length(1), // help footer
        ])
        .split(f.area());

    if let Some(text) = app.notice() {
        let notice = Paragraph::new(format!("{text} (Esc to dismiss)"))
            .style(Style::default().fg(Color::Black).bg(Color::Yellow));
        f.render_widget(notice, chunks[0]);
    }

    let status = Paragraph::new(status_line(app)).style(Style::default().fg(Color::White));
    f.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(chunks[2]);

    board::render_board(f, body[0], app);
    moves::render_moves(f, body[1], app);

    let help = Paragraph::new(
        "arrows move  enter place  +/- size  [/] history  s sort  r reset  q quit",
    )
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    );
    f.render_widget(help, chunks[3]);
}

fn status_line(app: &App) -> String {
    let session = app.session();
    let status = match session.status() {
        GameStatus::Won { winner, .. } => format!("Winner: {winner}"),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress { next } => format!("Next player: {next}"),
    };
    let order = if session.ascending() {
        "Ascending"
    } else {
        "Descending"
    };
    format!(
        "Board size: {}   Sort: {}   {}",
        session.size(),
        order,
        status
    )
}
