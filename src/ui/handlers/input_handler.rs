//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Focus};
use super::{BoardHandler, HistoryHandler};

/// Helper struct for routing key presses to the board or the move list.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q' | 'Q'), _)
            | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Tab, _) => {
                self.app.focus = match self.app.focus {
                    Focus::Board => Focus::History,
                    Focus::History => {
                        self.app.selected_move = self.app.game.current_move();
                        Focus::Board
                    }
                };
            }

            (KeyCode::Char('s' | 'S'), _) => HistoryHandler::new(self.app).toggle_sort(),
            (KeyCode::Home, _) => HistoryHandler::new(self.app).jump_to_start(),
            (KeyCode::End, _) => HistoryHandler::new(self.app).jump_to_latest(),

            (KeyCode::Char(c @ '1'..='9'), _) => {
                let cell = c as usize - '1' as usize;
                BoardHandler::new(self.app).play_cell(cell);
            }

            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let mut board = BoardHandler::new(self.app);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => board.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => board.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => board.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => board.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => board.play_cursor(),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let mut history = HistoryHandler::new(self.app);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => history.select_up(),
            KeyCode::Down | KeyCode::Char('j') => history.select_down(),
            KeyCode::Enter | KeyCode::Char(' ') => history.jump_to_selected(),
            _ => {}
        }
    }
}
