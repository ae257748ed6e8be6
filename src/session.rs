//! A series of games between a human and the computer.
//!
//! Each new game alternates who opens. Like [`GameState`], a session is a
//! plain value: every transition returns the next session.

use crate::{
    common::{BoardError, GameOutcome, Marker, Move},
    game::GameState,
};

/// Running tally across the games of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub human: u32,
    pub computer: u32,
    pub draws: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    game: GameState,
    human: Marker,
    human_opens: bool,
    score: Score,
}

impl Session {
    /// Start a session; the human opens the first game.
    pub fn new(human: Marker) -> Self {
        Self {
            game: GameState::new(human),
            human,
            human_opens: true,
            score: Score::default(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn human(&self) -> Marker {
        self.human
    }

    pub fn computer(&self) -> Marker {
        self.human.opponent()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Did the human open the current game?
    pub fn human_opens(&self) -> bool {
        self.human_opens
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && self.game.to_move() == self.human
    }

    /// Play `mv` for whoever is to move, updating the score when the game ends.
    pub fn play(&self, mv: Move) -> Result<Session, BoardError> {
        let game = self.game.play(mv)?;
        let mut score = self.score;
        match game.outcome() {
            GameOutcome::Win(m) if m == self.human => score.human += 1,
            GameOutcome::Win(_) => score.computer += 1,
            GameOutcome::Draw => score.draws += 1,
            GameOutcome::NoWinnerYet => {}
        }
        if game.is_over() {
            log::info!("game over: {:?}, score {:?}", game.outcome(), score);
        }
        Ok(Session { game, score, ..*self })
    }

    /// Fresh board with the other side opening. The score carries over.
    pub fn restart(&self) -> Session {
        let human_opens = !self.human_opens;
        let opener = if human_opens {
            self.human
        } else {
            self.computer()
        };
        Session {
            game: GameState::new(opener),
            human_opens,
            ..*self
        }
    }

    /// End-of-game message from the human's point of view.
    pub fn result_message(&self) -> Option<&'static str> {
        match self.game.outcome() {
            GameOutcome::Win(m) if m == self.human => Some("You win"),
            GameOutcome::Win(_) => Some("You lost"),
            GameOutcome::Draw => Some("No one wins"),
            GameOutcome::NoWinnerYet => None,
        }
    }
}
