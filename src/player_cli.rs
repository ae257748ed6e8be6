#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Cell, Move},
    config::BOARD_SIZE,
    game::GameState,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading moves from a line-based input, stdin by default.
pub struct CliPlayer {
    name: String,
    // None reads through the shared stdin buffer, so several players can
    // take turns on one terminal.
    input: Option<Box<dyn BufRead + Send>>,
}

impl CliPlayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input: None,
        }
    }

    /// Read moves from `input` instead of stdin.
    pub fn with_input(name: &str, input: Box<dyn BufRead + Send>) -> Self {
        Self {
            name: name.to_string(),
            input: Some(input),
        }
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self.input.as_mut() {
            Some(input) => input.read_line(buf),
            None => io::stdin().read_line(buf),
        }
    }
}

/// `B2`-style label for a cell: column letter, then 1-based row.
pub fn coord_to_string(mv: Move) -> String {
    let col = (b'A' + mv.col as u8) as char;
    format!("{}{}", col, mv.row + 1)
}

/// Parse either `B2` (column letter, row number) or `2 2` / `2,2`
/// (row and column, both 1-based).
pub fn parse_coord(input: &str) -> Result<Move, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let first = chars.next().ok_or("Empty input")?;
    if first.is_ascii_alphabetic() {
        let col = (first.to_ascii_uppercase() as u8).wrapping_sub(b'A') as usize;
        if col >= BOARD_SIZE {
            return Err(format!("Column '{}' out of bounds - must be A-C", first));
        }
        let row_str: String = chars.collect();
        let row = parse_index(row_str.trim(), "row")?;
        return Ok(Move::new(row, col));
    }

    let parts: Vec<&str> = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Ok(Move::new(parse_index(row, "row")?, parse_index(col, "column")?)),
        _ => Err("Enter a cell like B2 or '2 2' (row column)".to_string()),
    }
}

fn parse_index(s: &str, what: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 1-3", what, s))?;
    if n == 0 || n > BOARD_SIZE {
        return Err(format!("{} {} out of bounds - must be 1-3", what, n));
    }
    Ok(n - 1)
}

/// Render a board with column letters and row numbers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("     A   B   C\n");
    for (r, row) in board.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => " ".to_string(),
                Cell::Marker(m) => m.to_string(),
            })
            .collect();
        out.push_str(&format!("  {}  {}\n", r + 1, cells.join(" | ")));
        if r + 1 < BOARD_SIZE {
            out.push_str("    ---+---+---\n");
        }
    }
    out
}

pub fn print_board(board: &Board) {
    print!("{}", render_board(board));
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _rng: &mut SmallRng, state: &GameState) -> anyhow::Result<Move> {
        loop {
            print!("{} ({}) > ", self.name, state.to_move());
            io::stdout().flush()?;
            let mut buf = String::new();
            if self.read_line(&mut buf)? == 0 {
                anyhow::bail!("input closed");
            }
            let mv = match parse_coord(&buf) {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            match state.board().cell(mv) {
                Ok(Cell::Empty) => return Ok(mv),
                Ok(_) => println!("{} is already taken", coord_to_string(mv)),
                Err(e) => println!("{}", e),
            }
        }
    }
}
