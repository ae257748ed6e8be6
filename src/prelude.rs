//! Commonly used types and utilities for ease of import.

pub use crate::{
    detect_winner, select_move, AiPlayer, Board, BoardError, Cell, GameOutcome, GameState,
    Marker, Move, Player, RandomPlayer, Session,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, CliPlayer};
