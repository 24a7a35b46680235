//! History consistency invariant: history and board describe the same moves.

use super::super::{Engine, Square};
use super::Invariant;

/// Invariant: History length equals number of occupied squares, and each
/// recorded move's square holds that move's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        engine.history().len() == board.occupied()
            && engine
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_engine_holds() {
        assert!(HistoryConsistentInvariant::holds(&Engine::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let engine = Engine::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 9);
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut engine = Engine::replay([4]);
        engine.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = Engine::replay([4]);
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
