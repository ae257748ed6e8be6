use crate::{ai, common::Move, game::GameState};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player using the win / block / center / random heuristic.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn choose_move(&mut self, rng: &mut SmallRng, state: &GameState) -> anyhow::Result<Move> {
        ai::select_move(state.board(), state.to_move(), rng).map_err(|e| anyhow::anyhow!(e))
    }

    fn is_computer(&self) -> bool {
        true
    }
}

/// Computer player that picks any empty cell at random.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random computer"
    }

    fn choose_move(&mut self, rng: &mut SmallRng, state: &GameState) -> anyhow::Result<Move> {
        ai::random_move(state.board(), rng).map_err(|e| anyhow::anyhow!(e))
    }

    fn is_computer(&self) -> bool {
        true
    }
}
