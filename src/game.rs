use crate::{
    board::Board,
    common::{BoardError, GameOutcome, Marker, Move},
    win::{outcome, winning_line, Line},
};

/// Snapshot of one game: board, whose turn it is and the result so far.
///
/// Transitions never mutate; [`GameState::play`] hands back a new state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GameStateRepr")
)]
pub struct GameState {
    board: Board,
    to_move: Marker,
    outcome: GameOutcome,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct GameStateRepr {
    board: Board,
    to_move: Marker,
    outcome: GameOutcome,
}

#[cfg(feature = "std")]
impl TryFrom<GameStateRepr> for GameState {
    type Error = BoardError;

    /// The outcome is recomputed from the board; a saved one that disagrees
    /// is rejected.
    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = GameState::from_board(repr.board, repr.to_move);
        if state.outcome != repr.outcome {
            return Err(BoardError::OutcomeMismatch);
        }
        Ok(state)
    }
}

impl GameState {
    /// Fresh game on an empty board with `first` to move.
    pub fn new(first: Marker) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: GameOutcome::NoWinnerYet,
        }
    }

    /// Resume from an arbitrary board; the outcome is recomputed from it.
    pub fn from_board(board: Board, to_move: Marker) -> Self {
        Self {
            board,
            to_move,
            outcome: outcome(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker that plays next.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.outcome, GameOutcome::NoWinnerYet)
    }

    pub fn winner(&self) -> Option<Marker> {
        match self.outcome {
            GameOutcome::Win(m) => Some(m),
            _ => None,
        }
    }

    /// Completed line of the winner, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// Place the current marker at `mv` and return the following state.
    pub fn play(&self, mv: Move) -> Result<GameState, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        let board = self.board.with_mark(mv, self.to_move)?;
        let outcome = outcome(&board);
        log::trace!("{} -> {} ({:?})", self.to_move, mv, outcome);
        Ok(GameState {
            board,
            to_move: self.to_move.opponent(),
            outcome,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Marker::X)
    }
}
