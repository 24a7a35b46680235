//! Error types for cell input.

use derive_more::{Display, Error};

/// Error parsing a [`Position`](crate::Position) from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PositionError {
    /// A number outside the board's 0-8 range.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Neither a number nor a known position label.
    #[display("Unrecognized position: {:?}", _0)]
    Unrecognized(#[error(not(source))] String),
}
