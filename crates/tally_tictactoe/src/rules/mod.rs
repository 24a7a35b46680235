//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the engine, the invariants and the tests
//! all read the same definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Computes the outcome of a board.
///
/// A completed triple takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
