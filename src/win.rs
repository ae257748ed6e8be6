//! Win detection over a board snapshot.

use crate::board::{Board, Mask};
use crate::common::{GameOutcome, Marker, Move};
use crate::config::{BOARD_SIZE, LINES, LINE_BITS};

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub marker: Marker,
    pub cells: [Move; BOARD_SIZE],
}

/// First completed line, checking rows top to bottom, then columns left to
/// right, then the main diagonal, then the anti-diagonal.
pub fn winning_line(board: &Board) -> Option<Line> {
    for (cells, &bits) in LINES.iter().zip(LINE_BITS.iter()) {
        let mask = Mask::from_raw(bits);
        for marker in [Marker::X, Marker::O] {
            if board.marks(marker).contains(mask) {
                return Some(Line {
                    marker,
                    cells: cells.map(Move::from),
                });
            }
        }
    }
    None
}

/// Marker owning the first completed line, if any.
pub fn detect_winner(board: &Board) -> Option<Marker> {
    winning_line(board).map(|line| line.marker)
}

/// Winner, draw or still in progress.
pub fn outcome(board: &Board) -> GameOutcome {
    match detect_winner(board) {
        Some(marker) => GameOutcome::Win(marker),
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::NoWinnerYet,
    }
}
