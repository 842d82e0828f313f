use anyhow::{Result, bail};

use crate::board::{
    Board, CELL_COUNT, Mark, MoveCoordinates, Status, Winner, calculate_winner, derive_status,
    identify_move_coordinates,
};

/// Result of a `play_move` call. Only `Placed` changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { mark: Mark, cell: usize },
    Occupied,
    GameOver,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub number: usize,
    pub coordinates: Option<MoveCoordinates>,
    pub is_current: bool,
}

impl MoveEntry {
    pub fn description(&self) -> String {
        let mut description = if self.is_current {
            format!("You are at move #{}", self.number)
        } else if self.number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.number)
        };

        if let Some(coords) = self.coordinates {
            description.push_str(&format!(" {coords}"));
        }

        description
    }
}

/// Snapshot history plus the position currently on display.
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Board>,
    current: usize,
}

impl Game {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Replay a list of cells from the initial position. Every cell must
    /// place a mark; an occupied cell or a move after a win is an error.
    pub fn from_moves(cells: &[usize]) -> Result<Self> {
        let mut game = Self::new();
        for (n, &cell) in cells.iter().enumerate() {
            match game.play_move(cell)? {
                MoveOutcome::Placed { .. } => {}
                MoveOutcome::Occupied => bail!("move #{}: cell {cell} is already taken", n + 1),
                MoveOutcome::GameOver => {
                    bail!("move #{}: cell {cell} played after the game was won", n + 1)
                }
            }
        }
        Ok(game)
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn current_move(&self) -> usize {
        self.current
    }

    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current]
    }

    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    pub fn winner(&self) -> Option<Winner> {
        calculate_winner(self.current_board())
    }

    pub fn status(&self) -> Status {
        derive_status(self.current_board(), self.x_is_next())
    }

    /// Place the next mark on `cell` of the displayed board.
    ///
    /// Any snapshots after the displayed one are discarded first. Occupied
    /// cells and finished games leave everything unchanged.
    pub fn play_move(&mut self, cell: usize) -> Result<MoveOutcome> {
        if cell >= CELL_COUNT {
            bail!("cell index {cell} out of range (expected 0..{CELL_COUNT})");
        }

        let board = *self.current_board();
        if calculate_winner(&board).is_some() {
            return Ok(MoveOutcome::GameOver);
        }
        if !board.get(cell).is_empty() {
            return Ok(MoveOutcome::Occupied);
        }

        let mark = self.next_mark();
        let next = board.with_mark(cell, mark);

        if self.current < self.latest_move() {
            tracing::debug!(
                "Discarding {} future snapshot(s)",
                self.latest_move() - self.current
            );
        }
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        Ok(MoveOutcome::Placed { mark, cell })
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.history.len() {
            bail!(
                "move #{index} does not exist (history has {} entries)",
                self.history.len()
            );
        }
        self.current = index;
        Ok(())
    }

    /// Move list in history order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(number, board)| MoveEntry {
                number,
                coordinates: identify_move_coordinates(
                    number.checked_sub(1).map(|prev| &self.history[prev]),
                    board,
                ),
                is_current: number == self.current,
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn play_all(game: &mut Game, cells: &[usize]) {
        for &cell in cells {
            let outcome = game.play_move(cell).unwrap();
            assert!(matches!(outcome, MoveOutcome::Placed { .. }), "cell {cell}");
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_diagonal_win_scenario() {
        let mut game = Game::new();
        // X: 0,4,8  O: 1,2
        play_all(&mut game, &[0, 1, 4, 2, 8]);

        let winner = game.winner().unwrap();
        assert_eq!(winner.mark, Mark::X);
        assert_eq!(winner.line, [0, 4, 8]);
        assert_eq!(game.status().to_string(), "Winner: X");
    }

    #[test]
    fn test_draw_scenario() {
        let mut game = Game::new();
        // X: 0,1,5,6,8  O: 2,3,4,7
        play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

        assert!(game.current_board().is_full());
        assert_eq!(game.status(), Status::Draw);
        assert_eq!(game.status().to_string(), "Draw");
    }

    #[test]
    fn test_jump_to_start_shows_empty_board() {
        let mut game = Game::from_moves(&[0, 1, 4, 2, 8]).unwrap();
        game.jump_to(0).unwrap();

        assert_eq!(game.status().to_string(), "Next player: X");
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.len(), 6);
    }

    #[test]
    fn test_turns_alternate() {
        let game = Game::from_moves(&[4, 0, 8, 2, 1, 7]).unwrap();

        for (i, pair) in game.history().windows(2).enumerate() {
            let index = i + 1;
            let coords = identify_move_coordinates(Some(&pair[0]), &pair[1]).unwrap();
            let cell = pair[1].get_at(coords.row, coords.col);
            let expected = if index % 2 == 1 { Cell::X } else { Cell::O };
            assert_eq!(cell, expected, "history index {index}");
        }
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut game = Game::from_moves(&[4]).unwrap();
        let before = game.history().to_vec();

        assert_eq!(game.play_move(4).unwrap(), MoveOutcome::Occupied);
        assert_eq!(game.history(), before.as_slice());
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::from_moves(&[0, 1, 4, 2, 8]).unwrap();
        let before = game.history().to_vec();

        assert_eq!(game.play_move(3).unwrap(), MoveOutcome::GameOver);
        assert_eq!(game.history(), before.as_slice());
        assert_eq!(game.current_move(), 5);
    }

    #[test]
    fn test_full_board_is_noop() {
        let mut game = Game::from_moves(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).unwrap();
        for cell in 0..CELL_COUNT {
            assert_eq!(game.play_move(cell).unwrap(), MoveOutcome::Occupied);
        }
        assert_eq!(game.len(), 10);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut game = Game::from_moves(&[0, 4, 1, 3, 8]).unwrap();
        let old_tail = game.history()[5];

        game.jump_to(2).unwrap();
        let outcome = game.play_move(6).unwrap();

        assert_eq!(outcome, MoveOutcome::Placed { mark: Mark::X, cell: 6 });
        assert_eq!(game.len(), 4);
        assert_eq!(game.current_move(), 3);
        assert!(!game.history().contains(&old_tail));
        assert!(game.jump_to(4).is_err());
    }

    #[test]
    fn test_earlier_snapshots_survive_new_moves() {
        let mut game = Game::from_moves(&[0, 4]).unwrap();
        let snapshots = game.history().to_vec();

        game.play_move(8).unwrap();
        game.jump_to(1).unwrap();
        game.play_move(2).unwrap();

        assert_eq!(&game.history()[..2], &snapshots[..2]);
        assert_eq!(game.history()[1].get(4), Cell::Empty);
    }

    #[test]
    fn test_jump_back_from_won_game_allows_play() {
        let mut game = Game::from_moves(&[0, 1, 4, 2, 8]).unwrap();
        assert!(game.status().is_terminal());
        game.jump_to(4).unwrap();

        assert_eq!(game.status().to_string(), "Next player: X");
        assert!(matches!(game.play_move(6).unwrap(), MoveOutcome::Placed { .. }));
        assert_eq!(game.len(), 6);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_out_of_range_inputs_are_rejected() {
        let mut game = Game::from_moves(&[0]).unwrap();

        assert!(game.play_move(9).is_err());
        assert!(game.jump_to(2).is_err());
        assert_eq!(game.len(), 2);
        assert_eq!(game.current_move(), 1);
        assert!(Game::from_moves(&[0, 42]).is_err());
    }

    #[test]
    fn test_replay_rejects_unplayable_moves() {
        let err = Game::from_moves(&[0, 0, 1]).unwrap_err();
        assert_eq!(err.to_string(), "move #2: cell 0 is already taken");

        let err = Game::from_moves(&[0, 1, 4, 2, 8, 3]).unwrap_err();
        assert_eq!(err.to_string(), "move #6: cell 3 played after the game was won");
    }

    #[test]
    fn test_move_descriptions() {
        let mut game = Game::from_moves(&[4, 0, 5]).unwrap();
        let labels: Vec<String> = game.moves().iter().map(MoveEntry::description).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 (1, 1)",
                "Go to move #2 (0, 0)",
                "You are at move #3 (1, 2)",
            ]
        );

        game.jump_to(0).unwrap();
        let moves = game.moves();
        assert_eq!(moves[0].description(), "You are at move #0");
        assert!(moves[0].is_current);
        assert_eq!(moves[3].description(), "Go to move #3 (1, 2)");
    }
}
