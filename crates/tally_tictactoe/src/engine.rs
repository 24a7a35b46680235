//! The game state engine: one board, the turn, and the running tally.

use super::invariants::{EngineInvariants, InvariantSet};
use super::{Board, Move, Outcome, Player, Position, Square, Stats, rules};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The index does not name a cell.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// What [`Engine::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Accepted {
        /// The move that was recorded.
        mv: Move,
        /// Outcome of the board after the move.
        outcome: Outcome,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Returns true if the move ended the game.
    pub fn finished_game(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { outcome, .. } if outcome.is_over())
    }
}

/// Tic-tac-toe game state engine.
///
/// Holds the board, the player to move, the history of accepted moves since
/// the last reset, and the [`Stats`] tally. The outcome is never stored: it
/// is recomputed from the board, and the tally is bumped in the same call
/// that observes the board becoming terminal.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
    pub(crate) stats: Stats,
}

impl Engine {
    /// Creates an engine with an empty board, X to move and a zeroed tally.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
            stats: Stats::new(),
        }
    }

    /// Builds a fresh engine and applies `indices` in order.
    ///
    /// Rejected moves are skipped, as they would be from a click.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut engine = Self::new();
        for index in indices {
            engine.apply_move(index);
        }
        engine
    }

    /// Places the current player's mark at `index` (0-8, row-major).
    ///
    /// Out-of-range indices, occupied squares and finished games are
    /// rejected without touching any state. An accepted move flips the turn
    /// and, when it ends the game, adds one to the matching counter.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Move rejected: out of range");
            return MoveOutcome::Rejected(Rejection::OutOfRange(index));
        };

        if self.outcome().is_over() {
            debug!(%position, "Move rejected: game over");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Move rejected: square occupied");
            return MoveOutcome::Rejected(Rejection::SquareOccupied(position));
        }

        let mv = Move::new(self.to_move, position);
        self.board.set(position, Square::Occupied(mv.player));
        self.history.push(mv);
        self.to_move = mv.player.opponent();

        let outcome = self.outcome();
        if outcome.is_over() {
            self.stats.record(outcome);
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            debug!(%mv, "Move applied");
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after {}",
            mv
        );

        MoveOutcome::Accepted { mv, outcome }
    }

    /// Clears the board for a new game. The tally is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.history.clear();
        debug!("Board reset");
    }

    /// Zeroes the tally, then clears the board.
    #[instrument(skip(self))]
    pub fn reset_stats(&mut self) {
        self.stats.clear();
        info!("Stats reset");
        self.reset();
    }

    /// Indices of the completed triple when the game is won.
    pub fn winning_triple(&self) -> Option<[usize; 3]> {
        rules::winning_line(&self.board).map(|line| line.map(Position::to_index))
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the running tally.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Positions that would be accepted right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
