//! Application state and input handling.

use crossterm::event::KeyCode;
use gridtac::{GameSession, PlayError};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a transient notice stays visible without being dismissed.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// A transient user-facing message with its dismissal deadline.
struct Notice {
    text: String,
    expires_at: Instant,
}

/// Main application state: the game session plus view-only concerns
/// (board cursor, transient notice).
pub struct App {
    session: GameSession,
    cursor: (usize, usize),
    notice: Option<Notice>,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: (0, 0),
            notice: None,
        }
    }

    /// Gets the current game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the cursor as a cell index into the current board.
    pub fn cursor_index(&self) -> usize {
        let (row, col) = self.cursor;
        row * self.session.size() + col
    }

    /// Returns the visible notice text, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Clears the notice once its deadline has passed. Called before
    /// every draw; all timing runs on the event loop, no background task.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice
            && Instant::now() >= notice.expires_at
        {
            self.notice = None;
        }
    }

    /// Handles a key press. Quit is handled by the caller.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.increase_size(),
            KeyCode::Char('-') => self.decrease_size(),
            KeyCode::Char('[') => self.jump_back(),
            KeyCode::Char(']') => self.jump_forward(),
            KeyCode::Home => self.jump_start(),
            KeyCode::End => self.jump_end(),
            KeyCode::Char('s') => self.session.toggle_sort(),
            KeyCode::Char('r') => self.session.reset(),
            KeyCode::Esc => self.dismiss_notice(),
            _ => {}
        }
    }

    /// Dismisses the notice immediately, cancelling its timer.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let max = self.session.size() as isize - 1;
        let (row, col) = self.cursor;
        self.cursor = (
            (row as isize + dr).clamp(0, max) as usize,
            (col as isize + dc).clamp(0, max) as usize,
        );
    }

    fn place(&mut self) {
        let cell = self.cursor_index();
        match self.session.play(cell) {
            Ok(()) => {}
            // Occupied cells and finished games are silently ignored.
            Err(err @ (PlayError::Occupied { .. } | PlayError::Finished)) => {
                debug!(cell, %err, "move ignored");
            }
            Err(err) => {
                debug!(cell, %err, "move rejected");
            }
        }
    }

    fn increase_size(&mut self) {
        self.session.increase_size();
        self.clamp_cursor();
    }

    fn decrease_size(&mut self) {
        match self.session.decrease_size() {
            Ok(()) => self.clamp_cursor(),
            Err(err) => {
                self.notice = Some(Notice {
                    text: err.to_string(),
                    expires_at: Instant::now() + NOTICE_TIMEOUT,
                });
            }
        }
    }

    fn jump_back(&mut self) {
        let current = self.session.current_move();
        if current > 0 {
            let _ = self.session.jump_to(current - 1);
        }
    }

    fn jump_forward(&mut self) {
        let current = self.session.current_move();
        if current + 1 < self.session.history().len() {
            let _ = self.session.jump_to(current + 1);
        }
    }

    fn jump_start(&mut self) {
        let _ = self.session.jump_to(0);
    }

    fn jump_end(&mut self) {
        let _ = self.session.jump_to(self.session.history().len() - 1);
    }

    fn clamp_cursor(&mut self) {
        let max = self.session.size() - 1;
        self.cursor = (self.cursor.0.min(max), self.cursor.1.min(max));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtac::{GameStatus, Player};

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = App::new();
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.cursor_index(), 0);

        for _ in 0..10 {
            app.handle_key(KeyCode::Right);
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.cursor_index(), 8);
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().current().cell(), Some(1));
        assert_eq!(app.session().next_player(), Player::O);
    }

    #[test]
    fn test_place_on_occupied_cell_ignored() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn test_decrease_below_minimum_sets_notice() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.session().size(), 2);
        assert!(app.notice().is_none());

        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.session().size(), 2);
        assert_eq!(app.notice(), Some("Cannot decrease board size below 2."));
    }

    #[test]
    fn test_escape_dismisses_notice() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('-'));
        app.handle_key(KeyCode::Char('-'));
        assert!(app.notice().is_some());

        app.handle_key(KeyCode::Esc);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_cursor_clamped_after_shrink() {
        let mut app = App::new();
        for _ in 0..2 {
            app.handle_key(KeyCode::Right);
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.cursor_index(), 8);

        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.session().size(), 2);
        assert_eq!(app.cursor_index(), 3);
    }

    #[test]
    fn test_history_navigation_keys() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.session().current_move(), 1);
        app.handle_key(KeyCode::Home);
        assert_eq!(app.session().current_move(), 0);
        app.handle_key(KeyCode::End);
        assert_eq!(app.session().current_move(), 2);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.session().current_move(), 2);
    }

    #[test]
    fn test_status_reaches_won() {
        let mut app = App::new();
        // X: 0, 1, 2 (top row); O: 3, 4.
        let cells = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
        let mut app_cursor = (0usize, 0usize);
        for (row, col) in cells {
            while app_cursor.0 < row {
                app.handle_key(KeyCode::Down);
                app_cursor.0 += 1;
            }
            while app_cursor.0 > row {
                app.handle_key(KeyCode::Up);
                app_cursor.0 -= 1;
            }
            while app_cursor.1 < col {
                app.handle_key(KeyCode::Right);
                app_cursor.1 += 1;
            }
            while app_cursor.1 > col {
                app.handle_key(KeyCode::Left);
                app_cursor.1 -= 1;
            }
            app.handle_key(KeyCode::Enter);
        }
        assert!(matches!(
            app.session().status(),
            GameStatus::Won {
                winner: Player::X,
                ..
            }
        ));
    }
}
