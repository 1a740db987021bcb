//! Error types for the rules engine.

use chess_core::{LayoutError, Position, PositionError};
use thiserror::Error;

/// Errors returned by [`Board`](crate::Board) operations.
///
/// Everything except [`RulesError::AmbiguousState`] is recoverable: the caller
/// reports it and asks for another move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The requested move is not in the legal set of the piece on `from`,
    /// or there is no piece of the side to move on `from`.
    #[error("illegal move: {from} {to}")]
    IllegalMove { from: Position, to: Position },

    #[error(transparent)]
    Position(#[from] PositionError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A custom setup was rejected (occupied square, or setup after play began).
    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    /// Grid and rosters disagree. Never expected in correct operation.
    #[error("ambiguous board state: {0}")]
    AmbiguousState(String),
}
