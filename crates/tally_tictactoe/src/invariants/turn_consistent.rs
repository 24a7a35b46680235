//! Turn consistency invariant: the mark to move follows from the board.

use super::super::{Engine, Player};
use super::Invariant;

/// Invariant: X is to move exactly when both marks have been placed
/// equally often, O exactly when X is one ahead.
pub struct TurnConsistentInvariant;

impl Invariant<Engine> for TurnConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        match engine.to_move() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Player to move matches the marks on the board"
    }
}
