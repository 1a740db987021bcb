//! Candidate moves.

use crate::board::{Board, Square};
use chess_core::Position;

/// A transient candidate move between two squares of a specific board.
///
/// `capture` reflects whether the arrival square was occupied when the event
/// was created; en passant captures are resolved by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub depart: Square,
    pub arrive: Square,
    pub capture: bool,
}

impl Event {
    /// Snapshots the two squares of `board`.
    pub fn new(board: &Board, from: Position, to: Position) -> Self {
        let depart = board.square(from);
        let arrive = board.square(to);
        Event {
            depart,
            arrive,
            capture: arrive.occupant().is_some(),
        }
    }

    #[inline]
    pub fn from(&self) -> Position {
        self.depart.position()
    }

    #[inline]
    pub fn to(&self) -> Position {
        self.arrive.position()
    }
}
