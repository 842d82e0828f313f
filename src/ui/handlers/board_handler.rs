//! Cursor movement and move placement on the board.

use crate::{
    board::{BOARD_SIDE, MoveCoordinates},
    game::MoveOutcome,
};

use super::super::app::App;

/// Helper struct for playing moves on the displayed board.
pub struct BoardHandler<'a> {
    app: &'a mut App,
}

impl<'a> BoardHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Shift the cursor, stopping at the board edges.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.app.cursor / BOARD_SIDE;
        let col = self.app.cursor % BOARD_SIDE;
        let max = BOARD_SIDE as isize - 1;

        let row = (row as isize + d_row).clamp(0, max) as usize;
        let col = (col as isize + d_col).clamp(0, max) as usize;
        self.app.cursor = row * BOARD_SIDE + col;
    }

    pub fn play_cursor(&mut self) {
        self.play_cell(self.app.cursor);
    }

    pub fn play_cell(&mut self, cell: usize) {
        self.app.cursor = cell;
        let coords = MoveCoordinates::from_index(cell);

        match self.app.game.play_move(cell) {
            Ok(MoveOutcome::Placed { mark, .. }) => {
                let number = self.app.game.current_move();
                self.app.selected_move = number;
                self.app.log(format!("Move #{number}: {mark} at {coords}"));

                let status = self.app.game.status();
                if status.is_terminal() {
                    self.app.log(format!("Game finished: {status}"));
                    self.app.message = Some(status.to_string());
                }
            }
            Ok(MoveOutcome::Occupied) => {
                self.app.message = Some(format!("Cell {coords} is already taken"));
            }
            Ok(MoveOutcome::GameOver) => {
                self.app.message =
                    Some("Game is over! Jump back in the move list to play on.".to_string());
            }
            Err(e) => {
                tracing::warn!("Rejected move: {e}");
                self.app.message = Some(e.to_string());
            }
        }
    }
}
