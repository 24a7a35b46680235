//! Tally Tic-Tac-Toe - pure game state for a single board with a running tally.
//!
//! The crate holds no presentation logic. A front end renders the
//! [`Engine`] and forwards cell activations to [`Engine::apply_move`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`] and named [`Position`]s
//! - **Rules**: pure win/draw evaluation over the 8 fixed triples
//! - **Engine**: board, turn, history and the win/draw [`Stats`]
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{Engine, Outcome, Player};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome(), Outcome::Won(Player::X));
//! assert_eq!(engine.winning_triple(), Some([0, 1, 2]));
//! assert_eq!(engine.stats().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod outcome;
mod position;
mod stats;
mod types;

pub mod invariants;
pub mod rules;

pub use action::Move;
pub use engine::{Engine, MoveOutcome, Rejection};
pub use error::PositionError;
pub use outcome::Outcome;
pub use position::Position;
pub use stats::Stats;
pub use types::{Board, Player, Square};
