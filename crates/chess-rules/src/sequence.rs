//! Move history.

use crate::PieceId;
use chess_core::{Color, PieceKind, Position};
use std::fmt;

/// Side effects of a move beyond relocating the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    /// Pawn advanced two squares from its starting rank.
    DoubleStep,
    /// Pawn captured the pawn on `captured_at` en passant.
    EnPassant { captured_at: Position },
    /// King castled; `rook` moved from `rook_from` to `rook_to`.
    Castle {
        rook: PieceId,
        rook_from: Position,
        rook_to: Position,
    },
    /// Pawn reached the farthest rank and became `PieceKind`.
    Promotion(PieceKind),
}

/// An applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: PieceId,
    /// Its kind before moving (a promoting pawn is recorded as a pawn).
    pub kind: PieceKind,
    pub color: Color,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceId>,
    pub special: Option<Special>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Ordered, append-only list of applied moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    records: Vec<MoveRecord>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// The most recent move, if any.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// The `(from, to)` pairs of every move, in order.
    pub fn moves(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.records.iter().map(|r| (r.from, r.to))
    }

    /// Returns true if the piece has ever been moved, including a rook moved by castling.
    pub fn touches(&self, id: PieceId) -> bool {
        self.records.iter().any(|r| {
            r.piece == id || matches!(r.special, Some(Special::Castle { rook, .. }) if rook == id)
        })
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}. {}", i + 1, record)?;
        }
        Ok(())
    }
}
