//! Common types for tic-tac-toe: markers, cells, moves, outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// One of the two player markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The other marker.
    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Marker(Marker),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marker(m) => m.symbol(),
        }
    }

    /// Parse the text form used by [`crate::Board`]'s `FromStr`.
    pub fn from_symbol(ch: char) -> Result<Cell, BoardError> {
        match ch {
            '.' | '_' => Ok(Cell::Empty),
            'X' | 'x' => Ok(Cell::Marker(Marker::X)),
            'O' | 'o' => Ok(Cell::Marker(Marker::O)),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Marker(marker)
    }
}

/// A board coordinate, row and column both in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of the cell.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a game after the latest placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    NoWinnerYet,
    Win(Marker),
    /// Board is full and nobody completed a line.
    Draw,
}

/// Errors returned by Board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Grid handed in was not 3x3.
    InvalidBoardShape { rows: usize, cols: usize },
    /// Move selection was requested on a full board.
    NoLegalMove,
    /// Coordinates fall outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a marker.
    CellOccupied { row: usize, col: usize },
    /// The game has already been won or drawn.
    GameOver,
    /// Unrecognised character in a text board.
    InvalidCell(char),
    /// Both markers claim the same cell.
    OverlappingMarks,
    /// A mask has bits set beyond the 3x3 grid.
    MarksOffGrid,
    /// Stored result disagrees with the board it was saved with.
    OutcomeMismatch,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidBoardShape { rows, cols } => {
                write!(f, "Board must be 3x3, got {}x{}", rows, cols)
            }
            BoardError::NoLegalMove => write!(f, "No legal move: the board is full"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already taken", row, col)
            }
            BoardError::GameOver => write!(f, "Game is already over"),
            BoardError::InvalidCell(ch) => write!(f, "Invalid cell character '{}'", ch),
            BoardError::OverlappingMarks => write!(f, "A cell is marked by both X and O"),
            BoardError::MarksOffGrid => write!(f, "Marks lie outside the 3x3 grid"),
            BoardError::OutcomeMismatch => write!(f, "Stored outcome does not match the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
