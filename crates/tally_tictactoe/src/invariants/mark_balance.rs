//! Mark balance invariant: X never trails O and never leads by more than one.

use super::super::{Engine, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and marks alternate, so any other difference means a
/// square was written outside of an accepted move.
pub struct MarkBalanceInvariant;

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_alternating_moves_hold() {
        let mut engine = Engine::new();
        for index in [4, 0, 8, 2] {
            engine.apply_move(index);
            assert!(MarkBalanceInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_extra_o_violates() {
        let mut engine = Engine::new();
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MarkBalanceInvariant::holds(&engine));
    }

    #[test]
    fn test_double_x_violates() {
        let mut engine = Engine::replay([0]);
        engine.board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::holds(&engine));
    }
}
