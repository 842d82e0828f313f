use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Every winning line, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A single 3x3 snapshot, indexed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from explicit cells (row-major).
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn get_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_SIDE + col]
    }

    /// Return a copy of this board with `index` set to `mark`.
    /// `self` is left as it was.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark.to_cell();
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn winner(&self) -> Option<Winner> {
        calculate_winner(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<&str> = (0..BOARD_SIDE)
                .map(|col| match self.get_at(row, col) {
                    Cell::Empty => " ",
                    Cell::X => "X",
                    Cell::O => "O",
                })
                .collect();
            writeln!(f, " {} | {} | {}", symbols[0], symbols[1], symbols[2])?;
        }
        Ok(())
    }
}

/// A completed line on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    pub mark: Mark,
    pub line: [usize; 3],
}

impl Winner {
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Scan the winning lines in order and report the first complete one.
pub fn calculate_winner(board: &Board) -> Option<Winner> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some(Winner { mark, line: [a, b, c] })
    })
}

/// Displayed game status for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl Status {
    /// Won and drawn positions accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => f.write_str("Draw"),
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

pub fn derive_status(board: &Board, x_is_next: bool) -> Status {
    if let Some(winner) = calculate_winner(board) {
        Status::Winner(winner.mark)
    } else if board.is_full() {
        Status::Draw
    } else if x_is_next {
        Status::NextPlayer(Mark::X)
    } else {
        Status::NextPlayer(Mark::O)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCoordinates {
    pub row: usize,
    pub col: usize,
}

impl MoveCoordinates {
    pub fn from_index(index: usize) -> Self {
        MoveCoordinates {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        }
    }
}

impl fmt::Display for MoveCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Locate the cell that changed between two consecutive snapshots.
///
/// Returns `None` for the initial snapshot (no predecessor). Consecutive
/// snapshots must differ in exactly one cell; anything else panics.
pub fn identify_move_coordinates(prev: Option<&Board>, curr: &Board) -> Option<MoveCoordinates> {
    let prev = prev?;
    let changed: Vec<usize> = (0..CELL_COUNT)
        .filter(|&i| prev.get(i) != curr.get(i))
        .collect();
    assert_eq!(
        changed.len(),
        1,
        "consecutive snapshots must differ in exactly one cell, found {changed:?}"
    );
    Some(MoveCoordinates::from_index(changed[0]))
}
