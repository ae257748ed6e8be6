#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
pub mod win;

pub use ai::{
    find_blocking_move, find_winning_move, random_move, select_move, select_move_with_rule,
    Decision, Rule,
};
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::{Board, EmptyCells, Mask};
pub use common::*;
pub use config::*;
pub use game::GameState;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use player::Player;
pub use player_ai::{AiPlayer, RandomPlayer};
#[cfg(feature = "std")]
pub use player_cli::{coord_to_string, parse_coord, print_board, render_board, CliPlayer};
pub use session::{Score, Session};
pub use win::{detect_winner, outcome, winning_line, Line};
