use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{AiPlayer, Board, GameState, Marker, Player, RandomPlayer, Session};

fn random_game(seed: u64, plies: usize) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ai = AiPlayer::new();
    let mut random = RandomPlayer::new();
    let mut state = GameState::new(Marker::X);
    for _ in 0..plies {
        if state.is_over() {
            break;
        }
        let mv = match state.to_move() {
            Marker::X => random.choose_move(&mut rng, &state).unwrap(),
            Marker::O => ai.choose_move(&mut rng, &state).unwrap(),
        };
        state = state.play(mv).unwrap();
    }
    state
}

proptest! {
    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), plies in 0usize..10) {
        let state = random_game(seed, plies);
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: GameState = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(state, decoded);
        prop_assert_eq!(decoded.board().to_string(), state.board().to_string());
    }
}

#[test]
fn session_roundtrip() {
    let session = Session::new(Marker::O)
        .play(tictactoe::Move::new(1, 1))
        .unwrap()
        .restart();
    let bytes = bincode::serialize(&session).unwrap();
    let decoded: Session = bincode::deserialize(&bytes).unwrap();
    assert_eq!(session, decoded);
}

#[test]
fn board_json_rejects_cell_owned_by_both_markers() {
    let err = serde_json::from_str::<Board>(r#"{"x":{"bits":7},"o":{"bits":7}}"#).unwrap_err();
    assert!(err.to_string().contains("marked by both X and O"), "{}", err);
}

#[test]
fn board_json_rejects_bits_outside_grid() {
    let err = serde_json::from_str::<Board>(r#"{"x":{"bits":512},"o":{"bits":0}}"#).unwrap_err();
    assert!(err.to_string().contains("outside the 3x3 grid"), "{}", err);
}

#[test]
fn board_json_accepts_valid_masks() {
    let board: Board = serde_json::from_str(r#"{"x":{"bits":3},"o":{"bits":24}}"#).unwrap();
    assert_eq!(board, "XX./OO./...".parse::<Board>().unwrap());
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
}

#[test]
fn game_state_json_rejects_outcome_that_contradicts_board() {
    let json = r#"{"board":{"x":{"bits":0},"o":{"bits":0}},"to_move":"X","outcome":{"Win":"O"}}"#;
    let err = serde_json::from_str::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("does not match the board"), "{}", err);
}

#[test]
fn game_state_json_keeps_consistent_outcome() {
    let json = r#"{"board":{"x":{"bits":7},"o":{"bits":24}},"to_move":"O","outcome":{"Win":"X"}}"#;
    let state: GameState = serde_json::from_str(json).unwrap();
    assert!(state.is_over());
    assert_eq!(state.winner(), Some(Marker::X));
}
