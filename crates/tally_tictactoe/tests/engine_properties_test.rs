//! Property tests over arbitrary click sequences.

use proptest::prelude::*;
use tally_tictactoe::invariants::{EngineInvariants, InvariantSet};
use tally_tictactoe::{Engine, MoveOutcome, Outcome, rules};

proptest! {
    #[test]
    fn invariants_hold_after_every_click(clicks in prop::collection::vec(0usize..12, 0..40)) {
        let mut engine = Engine::new();
        for index in clicks {
            engine.apply_move(index);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn rejected_clicks_change_nothing(clicks in prop::collection::vec(0usize..9, 0..30)) {
        let mut engine = Engine::new();
        for index in clicks {
            let board = engine.board().clone();
            let to_move = engine.to_move();
            let stats = *engine.stats();
            if let MoveOutcome::Rejected(_) = engine.apply_move(index) {
                prop_assert_eq!(engine.board(), &board);
                prop_assert_eq!(engine.to_move(), to_move);
                prop_assert_eq!(engine.stats(), &stats);
            }
        }
    }

    #[test]
    fn outcome_always_matches_board(clicks in prop::collection::vec(0usize..9, 0..20)) {
        let engine = Engine::replay(clicks);
        prop_assert_eq!(engine.outcome(), rules::evaluate(engine.board()));
        prop_assert_eq!(
            engine.winning_triple().is_some(),
            matches!(engine.outcome(), Outcome::Won(_))
        );
    }

    #[test]
    fn tally_counts_finished_games(games in prop::collection::vec(prop::collection::vec(0usize..9, 0..20), 0..8)) {
        let mut engine = Engine::new();
        let mut finished = 0;
        for game in games {
            for index in game {
                if engine.apply_move(index).finished_game() {
                    finished += 1;
                }
            }
            engine.reset();
        }
        prop_assert_eq!(engine.stats().total(), finished);
    }
}
