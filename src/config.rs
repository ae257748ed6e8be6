pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const CENTER: (usize, usize) = (1, 1);

/// Every three-in-a-row line, in the order win detection checks them:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Bit patterns of [`LINES`], same order, bit `row * BOARD_SIZE + col`.
pub const LINE_BITS: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

/// Pause before the computer's move is shown, in milliseconds.
pub const AI_DELAY_MS: u64 = 200;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "TICTACTOE_LOG";
