//! Derived game status.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the current board.
///
/// Always computed from the board by [`rules::evaluate`](crate::rules::evaluate);
/// nothing stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    #[default]
    InProgress,
    /// Player completed a triple.
    Won(Player),
    /// Board is full with no triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
