//! Headless replay of a move list.

use tally_tictactoe::{Engine, MoveOutcome, Outcome, Position, Rejection};
use tracing::{info, instrument, warn};

/// Engine state after a replay, with the moves it ignored.
#[derive(Debug)]
pub struct ReplayReport {
    /// Engine after every move was offered.
    pub engine: Engine,
    /// Moves the engine rejected, in order.
    pub ignored: Vec<(Position, Rejection)>,
}

/// Offers each move to a fresh engine.
#[instrument]
pub fn replay(moves: &[Position]) -> ReplayReport {
    let mut engine = Engine::new();
    let mut ignored = Vec::new();
    for pos in moves {
        if let MoveOutcome::Rejected(reason) = engine.apply_move(pos.to_index()) {
            warn!(%pos, %reason, "Move ignored");
            ignored.push((*pos, reason));
        }
    }
    info!(outcome = %engine.outcome(), "Replay finished");
    ReplayReport { engine, ignored }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let engine = &self.engine;
        writeln!(f, "{}", engine.board())?;
        writeln!(f)?;

        match engine.outcome() {
            Outcome::InProgress => writeln!(f, "Next player: {}", engine.to_move())?,
            outcome => writeln!(f, "{}", outcome)?,
        }

        if let Some([a, b, c]) = engine.winning_triple() {
            writeln!(f, "Winning triple: {}, {}, {}", a, b, c)?;
        }

        for (pos, reason) in &self.ignored {
            writeln!(f, "Ignored {}: {}", pos, reason)?;
        }

        let stats = engine.stats();
        write!(
            f,
            "X {} Wins | {} Draws | O {} Wins",
            stats.x_wins(),
            stats.draws(),
            stats.o_wins()
        )
    }
}
