use tictactoe::{
    detect_winner, outcome, winning_line, Board, GameOutcome, Marker, Mask, Move, LINES, LINE_BITS,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_empty_board_has_no_winner() {
    let b = Board::new();
    assert_eq!(detect_winner(&b), None);
    assert_eq!(outcome(&b), GameOutcome::NoWinnerYet);
}

#[test]
fn test_every_line_wins_for_its_owner() {
    for marker in [Marker::X, Marker::O] {
        for line in LINES.iter() {
            let mut b = Board::new();
            for &(r, c) in line {
                b = b.with_mark(Move::new(r, c), marker).unwrap();
            }
            assert_eq!(detect_winner(&b), Some(marker), "line {:?}", line);
            let found = winning_line(&b).unwrap();
            assert_eq!(found.marker, marker);
            assert_eq!(found.cells, line.map(Move::from));
        }
    }
}

#[test]
fn test_partial_board_no_winner() {
    assert_eq!(detect_winner(&board("X../.O./...")), None);
    assert_eq!(detect_winner(&board("XX./OO./...")), None);
}

#[test]
fn test_mixed_line_is_not_a_win() {
    assert_eq!(detect_winner(&board("XXO/.../...")), None);
    assert_eq!(detect_winner(&board("X../O../X..")), None);
}

#[test]
fn test_line_order_breaks_ties() {
    assert_eq!(detect_winner(&board("XXX/OOO/...")), Some(Marker::X));
    assert_eq!(detect_winner(&board("OOO/XXX/...")), Some(Marker::O));
    assert_eq!(detect_winner(&board("X.O/X.O/X.O")), Some(Marker::X));
    assert_eq!(detect_winner(&board("O.X/OXX/OXX")), Some(Marker::O));
}

#[test]
fn test_diagonals() {
    assert_eq!(detect_winner(&board("O../.O./..O")), Some(Marker::O));
    assert_eq!(detect_winner(&board("..X/.X./X..")), Some(Marker::X));
}

#[test]
fn test_detect_winner_is_pure() {
    let b = board("XOX/.X./O.X");
    let copy = b;
    let first = detect_winner(&b);
    let second = detect_winner(&b);
    assert_eq!(first, Some(Marker::X));
    assert_eq!(first, second);
    assert_eq!(b, copy);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert!(b.is_full());
    assert_eq!(detect_winner(&b), None);
    assert_eq!(outcome(&b), GameOutcome::Draw);
}

#[test]
fn test_full_board_with_line_is_win_not_draw() {
    let b = board("XXX/OOX/XOO");
    assert!(b.is_full());
    assert_eq!(outcome(&b), GameOutcome::Win(Marker::X));
}

#[test]
fn test_line_bits_match_line_cells() {
    for (cells, &bits) in LINES.iter().zip(LINE_BITS.iter()) {
        assert_eq!(Mask::from_cells(cells.iter().copied()).unwrap(), Mask::from_raw(bits));
    }
}
