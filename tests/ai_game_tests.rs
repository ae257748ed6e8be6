use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{AiPlayer, GameOutcome, GameState, Marker, Player, RandomPlayer};

fn play_out(x: &mut dyn Player, o: &mut dyn Player, rng: &mut SmallRng) -> GameState {
    let mut state = GameState::new(Marker::X);
    let mut turns = 0;
    while !state.is_over() {
        turns += 1;
        let mv = match state.to_move() {
            Marker::X => x.choose_move(rng, &state).unwrap(),
            Marker::O => o.choose_move(rng, &state).unwrap(),
        };
        state = state.play(mv).unwrap();
        if turns > 9 {
            panic!("game took too many turns");
        }
    }
    state
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut p1 = AiPlayer::new();
        let mut p2 = AiPlayer::new();
        let end = play_out(&mut p1, &mut p2, &mut rng);
        assert!(end.is_over());
        assert!(end.board().move_count() >= 5);
    }
}

#[test]
fn test_heuristic_beats_random_player() {
    let mut ai_wins = 0;
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut ai = AiPlayer::new();
        let mut random = RandomPlayer::new();
        let end = play_out(&mut ai, &mut random, &mut rng);
        assert_eq!(end.board().get(1, 1).unwrap(), tictactoe::Cell::Marker(Marker::X));
        if end.outcome() == GameOutcome::Win(Marker::X) {
            ai_wins += 1;
        }
    }
    assert!(ai_wins > 80, "heuristic should win often against a random player");
}

#[test]
fn test_ai_player_takes_immediate_win() {
    let state = GameState::from_board("OO./XX./X..".parse().unwrap(), Marker::X);
    let mut rng = SmallRng::seed_from_u64(0);
    let mv = AiPlayer::new().choose_move(&mut rng, &state).unwrap();
    assert_eq!(state.play(mv).unwrap().outcome(), GameOutcome::Win(Marker::X));
}

#[test]
fn test_computer_players_report_names() {
    let ai = AiPlayer::new();
    let random = RandomPlayer::new();
    assert_eq!(ai.name(), "computer");
    assert_eq!(random.name(), "random computer");
    assert!(ai.is_computer() && random.is_computer());
}
