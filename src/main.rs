#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    coord_to_string, init_logging, print_board, AiPlayer, CliPlayer, GameOutcome, GameState,
    Marker, Player, RandomPlayer, Session, AI_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Opponent {
    /// Win, block, take the center, otherwise random.
    Heuristic,
    /// Any empty cell.
    Random,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum MarkerArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<MarkerArg> for Marker {
    fn from(m: MarkerArg) -> Self {
        match m {
            MarkerArg::X => Marker::X,
            MarkerArg::O => Marker::O,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer; each new game alternates who opens.
    Play {
        #[arg(long, value_enum, default_value_t = Opponent::Heuristic)]
        opponent: Opponent,
        #[arg(long, value_enum, default_value_t = MarkerArg::X)]
        human: MarkerArg,
        #[arg(long, default_value_t = AI_DELAY_MS, help = "Pause before the computer's move is shown")]
        delay_ms: u64,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Two people sharing one terminal.
    Hotseat,
    /// Watch the computer play itself.
    Watch {
        #[arg(long, default_value_t = AI_DELAY_MS)]
        delay_ms: u64,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            opponent,
            human,
            delay_ms,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let computer: Box<dyn Player> = match opponent {
                Opponent::Heuristic => Box::new(AiPlayer::new()),
                Opponent::Random => Box::new(RandomPlayer::new()),
            };
            run_session(
                Session::new(human.into()),
                CliPlayer::new("you"),
                computer,
                Duration::from_millis(delay_ms),
                &mut rng,
            )
            .await?;
        }
        Commands::Hotseat => {
            let mut rng = make_rng(None);
            let mut x = CliPlayer::new("player X");
            let mut o = CliPlayer::new("player O");
            run_game(GameState::new(Marker::X), &mut x, &mut o, Duration::ZERO, &mut rng).await?;
        }
        Commands::Watch { delay_ms, seed } => {
            let mut rng = make_rng(seed);
            let mut x = AiPlayer::new();
            let mut o = AiPlayer::new();
            run_game(
                GameState::new(Marker::X),
                &mut x,
                &mut o,
                Duration::from_millis(delay_ms),
                &mut rng,
            )
            .await?;
        }
    }
    Ok(())
}

/// Play one game to the end and return its final state.
#[cfg(feature = "std")]
async fn run_game(
    mut state: GameState,
    x: &mut dyn Player,
    o: &mut dyn Player,
    delay: Duration,
    rng: &mut SmallRng,
) -> anyhow::Result<GameState> {
    while !state.is_over() {
        print_board(state.board());
        let player: &mut dyn Player = match state.to_move() {
            Marker::X => &mut *x,
            Marker::O => &mut *o,
        };
        let mv = player.choose_move(rng, &state)?;
        if player.is_computer() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        println!("{} ({}) plays {}", player.name(), state.to_move(), coord_to_string(mv));
        state = state.play(mv).map_err(|e| anyhow::anyhow!(e))?;
        x.handle_move(mv, &state);
        o.handle_move(mv, &state);
    }
    print_board(state.board());
    match state.outcome() {
        GameOutcome::Win(m) => println!("{} wins", m),
        GameOutcome::Draw => println!("No one wins"),
        GameOutcome::NoWinnerYet => {}
    }
    Ok(state)
}

#[cfg(feature = "std")]
async fn run_session(
    mut session: Session,
    mut human: CliPlayer,
    mut computer: Box<dyn Player>,
    delay: Duration,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    println!(
        "You are {}. Enter moves like B2 (column, row) or '2 2' (row, column).",
        session.human()
    );
    loop {
        while !session.game().is_over() {
            let state = *session.game();
            if session.is_human_turn() {
                print_board(state.board());
                let mv = human.choose_move(rng, &state)?;
                session = session.play(mv).map_err(|e| anyhow::anyhow!(e))?;
            } else {
                let mv = computer.choose_move(rng, &state)?;
                tokio::time::sleep(delay).await;
                println!("{} plays {}", computer.name(), coord_to_string(mv));
                session = session.play(mv).map_err(|e| anyhow::anyhow!(e))?;
            }
        }

        print_board(session.game().board());
        if let Some(msg) = session.result_message() {
            println!("{}", msg);
        }
        let score = session.score();
        println!(
            "Score - you: {}, computer: {}, draws: {}",
            score.human, score.computer, score.draws
        );

        if !ask_again()? {
            break;
        }
        session = session.restart();
        if !session.human_opens() {
            println!("Computer opens this game.");
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn ask_again() -> anyhow::Result<bool> {
    print!("Start new game? [Y/n] ");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Ok(false);
    }
    Ok(!matches!(buf.trim().to_ascii_lowercase().as_str(), "n" | "no" | "q"))
}
