use crate::{common::Move, game::GameState};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Short label shown in prompts and move announcements.
    fn name(&self) -> &str;

    /// Choose the next cell for the marker to move in `state`.
    fn choose_move(&mut self, rng: &mut SmallRng, state: &GameState) -> anyhow::Result<Move>;

    /// Whether the front-end should pause before showing this player's move.
    fn is_computer(&self) -> bool {
        false
    }

    /// Inform the player of a move made by either side.
    fn handle_move(&mut self, _mv: Move, _state: &GameState) {}
}
