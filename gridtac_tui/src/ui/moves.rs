//! Move list rendering with time-travel targets.

use crate::app::App;
use gridtac::MoveRecord;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

/// Renders the move list, oldest first or newest first per the session's
/// sort flag. The current move is a non-interactive label; every other
/// entry is a jump target reachable with the history keys.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let current = session.current_move();

    let mut items: Vec<ListItem> = session
        .history()
        .iter()
        .enumerate()
        .map(|(number, record)| move_item(number, record, current))
        .collect();
    if !session.ascending() {
        items.reverse();
    }

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    f.render_widget(list, area);
}

fn move_item<'a>(number: usize, record: &MoveRecord, current: usize) -> ListItem<'a> {
    let location = record
        .location()
        .map(|(row, col)| format!(" ({row}, {col})"))
        .unwrap_or_default();
    if number == current {
        let label = if number > 0 {
            format!("You are at move #{number}{location}")
        } else {
            "You are at game start".to_string()
        };
        ListItem::new(label).style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        let label = if number > 0 {
            format!("Go to move #{number}{location}")
        } else {
            "Go to game start".to_string()
        };
        ListItem::new(label).style(Style::default().fg(Color::Blue))
    }
}
