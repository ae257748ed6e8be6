// Rule-based move selection for the computer player.
// Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{BoardError, Cell, Marker, Move},
    config::CENTER,
    win::detect_winner,
};
use rand::Rng;

/// Which heuristic rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// Completes a line for the mover.
    Win,
    /// Stops the opponent completing a line.
    Block,
    Center,
    Random,
}

/// A chosen move together with the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub rule: Rule,
}

/// Does placing `marker` at `mv` complete a line for `marker`?
fn wins_with(board: &Board, mv: Move, marker: Marker) -> bool {
    board
        .with_mark(mv, marker)
        .map(|next| detect_winner(&next) == Some(marker))
        .unwrap_or(false)
}

/// Winning cell for `mover`. When several exist the one found last in
/// row-major order is returned.
pub fn find_winning_move(board: &Board, mover: Marker) -> Option<Move> {
    let mut best = None;
    for &mv in board.empty_cells().iter() {
        if wins_with(board, mv, mover) {
            best = Some(mv);
        }
    }
    best
}

/// Cell the opponent of `mover` would win on. When several exist the first
/// one in row-major order is returned.
///
/// The opposite tie-break from [`find_winning_move`] is intentional: existing
/// games rely on it.
pub fn find_blocking_move(board: &Board, mover: Marker) -> Option<Move> {
    let opponent = mover.opponent();
    board
        .empty_cells()
        .iter()
        .copied()
        .find(|&mv| wins_with(board, mv, opponent))
}

/// Pick a move for `mover` and report which rule chose it.
///
/// Rules in priority order: win now, block the opponent, take the center,
/// otherwise a uniformly random empty cell drawn from `rng`.
pub fn select_move_with_rule<R: Rng + ?Sized>(
    board: &Board,
    mover: Marker,
    rng: &mut R,
) -> Result<Decision, BoardError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(BoardError::NoLegalMove);
    }

    let decision = if let Some(mv) = find_winning_move(board, mover) {
        Decision { mv, rule: Rule::Win }
    } else if let Some(mv) = find_blocking_move(board, mover) {
        Decision { mv, rule: Rule::Block }
    } else if board.get(CENTER.0, CENTER.1)? == Cell::Empty {
        Decision {
            mv: Move::from(CENTER),
            rule: Rule::Center,
        }
    } else {
        let cells = empty.as_slice();
        Decision {
            mv: cells[rng.random_range(0..cells.len())],
            rule: Rule::Random,
        }
    };

    log::debug!(
        "{} plays {} by {:?} rule on {:?}",
        mover,
        decision.mv,
        decision.rule,
        board
    );
    Ok(decision)
}

/// Pick the next cell for `mover` on `board`.
///
/// Returns [`BoardError::NoLegalMove`] when the board is full.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    mover: Marker,
    rng: &mut R,
) -> Result<Move, BoardError> {
    select_move_with_rule(board, mover, rng).map(|d| d.mv)
}

/// Uniformly random empty cell, ignoring every heuristic.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move, BoardError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(BoardError::NoLegalMove);
    }
    let cells = empty.as_slice();
    Ok(cells[rng.random_range(0..cells.len())])
}
