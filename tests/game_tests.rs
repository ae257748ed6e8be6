use tictactoe::{Board, BoardError, GameOutcome, GameState, Marker, Move};

fn play_all(mut state: GameState, moves: &[(usize, usize)]) -> GameState {
    for &mv in moves {
        state = state.play(Move::from(mv)).unwrap();
    }
    state
}

#[test]
fn test_turns_alternate() {
    let s0 = GameState::new(Marker::X);
    let s1 = s0.play(Move::new(1, 1)).unwrap();
    assert_eq!(s0.to_move(), Marker::X);
    assert!(s0.board().is_empty());
    assert_eq!(s1.to_move(), Marker::O);
    let s2 = s1.play(Move::new(0, 0)).unwrap();
    assert_eq!(s2.to_move(), Marker::X);
    assert_eq!(s2.board().move_count(), 2);
}

#[test]
fn test_o_can_open() {
    let s = GameState::new(Marker::O).play(Move::new(1, 1)).unwrap();
    assert_eq!(s.board().get(1, 1).unwrap(), tictactoe::Cell::Marker(Marker::O));
    assert_eq!(s.to_move(), Marker::X);
}

#[test]
fn test_win_ends_game() {
    let s = play_all(
        GameState::new(Marker::X),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    );
    assert_eq!(s.outcome(), GameOutcome::Win(Marker::X));
    assert_eq!(s.winner(), Some(Marker::X));
    assert!(s.is_over());
    let line = s.winning_line().unwrap();
    assert_eq!(line.cells, [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
    assert_eq!(s.play(Move::new(2, 2)).unwrap_err(), BoardError::GameOver);
}

#[test]
fn test_draw_when_board_fills() {
    let s = play_all(
        GameState::new(Marker::X),
        &[(0, 0), (1, 1), (2, 2), (0, 1), (2, 1), (2, 0), (0, 2), (1, 2), (1, 0)],
    );
    assert_eq!(s.outcome(), GameOutcome::Draw);
    assert_eq!(s.winner(), None);
    assert!(s.board().is_full());
    assert_eq!(s.board().to_string(), "XOX\nXOO\nOXX");
}

#[test]
fn test_illegal_moves_are_rejected() {
    let s = GameState::new(Marker::X).play(Move::new(0, 0)).unwrap();
    assert_eq!(
        s.play(Move::new(0, 0)).unwrap_err(),
        BoardError::CellOccupied { row: 0, col: 0 }
    );
    assert_eq!(
        s.play(Move::new(0, 3)).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 3 }
    );
    assert_eq!(s.to_move(), Marker::O);
}

#[test]
fn test_from_board_recomputes_outcome() {
    let board: Board = "OOO/XX./X..".parse().unwrap();
    let s = GameState::from_board(board, Marker::X);
    assert_eq!(s.outcome(), GameOutcome::Win(Marker::O));
    let s = GameState::from_board("XX./O../O..".parse().unwrap(), Marker::X);
    assert_eq!(s.outcome(), GameOutcome::NoWinnerYet);
}
