use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{AiPlayer, GameOutcome, GameState, Marker, Player};

fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let mut state = GameState::new(Marker::X);
    let mut moves = Vec::new();

    while !state.is_over() {
        let mv = match state.to_move() {
            Marker::X => p1.choose_move(&mut rng1, &state)?,
            Marker::O => p2.choose_move(&mut rng2, &state)?,
        };
        moves.push(json!([mv.row, mv.col]));
        state = state.play(mv).map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match state.outcome() {
        GameOutcome::Win(m) => m.to_string(),
        _ => "draw".to_string(),
    };

    let result = json!({
        "winner": winner,
        "moves": moves.len(),
        "history": moves,
        "board": state.board().to_string(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
