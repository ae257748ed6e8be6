//! Board snapshot: two disjoint occupancy masks, one per marker.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Marker, Move};
use crate::config::{BOARD_SIZE, CELL_COUNT};

/// Occupancy mask sized for the 3x3 grid.
pub type Mask = BitBoard<u16, BOARD_SIZE>;

/// Immutable 3x3 board value.
///
/// Boards are `Copy`; every placement returns a new board and leaves the
/// original snapshot as it was, so hypothetical moves never leak back to
/// the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardRepr")
)]
pub struct Board {
    x: Mask,
    o: Mask,
}

/// Wire form of [`Board`]; checked before it becomes one.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    x: Mask,
    o: Mask,
}

#[cfg(feature = "std")]
impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Board::from_masks(repr.x, repr.o)
    }
}

/// Fixed-capacity list of empty cells in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct EmptyCells {
    cells: [Move; CELL_COUNT],
    len: usize,
}

impl EmptyCells {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.cells[..self.len]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: Mask::new(),
            o: Mask::new(),
        }
    }

    /// Build a board from raw occupancy masks.
    ///
    /// The masks must stay inside the grid and never share a cell.
    pub fn from_masks(x: Mask, o: Mask) -> Result<Self, BoardError> {
        if !x.is_within_grid() || !o.is_within_grid() {
            return Err(BoardError::MarksOffGrid);
        }
        if !x.is_disjoint(o) {
            return Err(BoardError::OverlappingMarks);
        }
        Ok(Board { x, o })
    }

    /// Build a board from a grid of cells, rejecting anything that is not 3x3.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[Cell]>,
    {
        if rows.len() != BOARD_SIZE {
            let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
            return Err(BoardError::InvalidBoardShape {
                rows: rows.len(),
                cols,
            });
        }
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(BoardError::InvalidBoardShape {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            for (c, cell) in row.iter().enumerate() {
                if let Cell::Marker(m) = *cell {
                    board = board.with_mark(Move::new(r, c), m)?;
                }
            }
        }
        Ok(board)
    }

    /// Content of (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.x.get(row, col)? {
            Ok(Cell::Marker(Marker::X))
        } else if self.o.get(row, col)? {
            Ok(Cell::Marker(Marker::O))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Content of the cell addressed by `mv`.
    pub fn cell(&self, mv: Move) -> Result<Cell, BoardError> {
        self.get(mv.row, mv.col)
    }

    /// Occupancy mask of one marker.
    pub fn marks(&self, marker: Marker) -> Mask {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    /// Mask of all taken cells.
    pub fn occupied(&self) -> Mask {
        self.x | self.o
    }

    /// Returns a new board with `marker` placed at `mv`.
    ///
    /// Fails if the coordinates are off the board or the cell is taken.
    pub fn with_mark(&self, mv: Move, marker: Marker) -> Result<Board, BoardError> {
        if !self.cell(mv)?.is_empty() {
            return Err(BoardError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        let mut next = *self;
        match marker {
            Marker::X => next.x = self.x.with(mv.row, mv.col)?,
            Marker::O => next.o = self.o.with(mv.row, mv.col)?,
        }
        Ok(next)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> EmptyCells {
        let mut cells = [Move::new(0, 0); CELL_COUNT];
        let mut len = 0;
        for (row, col) in (!self.occupied()).iter_set_bits() {
            cells[len] = Move::new(row, col);
            len += 1;
        }
        EmptyCells { cells, len }
    }

    pub fn is_full(&self) -> bool {
        self.occupied().count_ones() == CELL_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// The grid as rows of cells.
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| self.get(r, c).unwrap_or(Cell::Empty))
        })
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses rows of `X`, `O` and `.` separated by newlines or `/`,
    /// e.g. `"XX./OO./..."`. Surrounding whitespace on each row is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut rows = 0;
        for line in s
            .split(|ch: char| ch == '\n' || ch == '/')
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            let cols = line.chars().filter(|ch| !ch.is_whitespace()).count();
            if rows >= BOARD_SIZE || cols != BOARD_SIZE {
                return Err(BoardError::InvalidBoardShape {
                    rows: rows + 1,
                    cols,
                });
            }
            for (c, ch) in line.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
                grid[rows][c] = Cell::from_symbol(ch)?;
            }
            rows += 1;
        }
        if rows != BOARD_SIZE {
            return Err(BoardError::InvalidBoardShape {
                rows,
                cols: BOARD_SIZE,
            });
        }
        Board::from_rows(&grid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        write!(f, ")")
    }
}
