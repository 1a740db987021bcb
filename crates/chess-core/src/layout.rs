//! Piece-placement layouts.
//!
//! A layout is the piece-placement field of FEN: eight ranks separated by `/`,
//! listed from rank 8 down to rank 1, each made of piece letters and digit runs
//! of empty squares. It is the only textual format the rules engine reads, and
//! is used to set up boards other than the standard start.

use crate::{Color, PieceKind, Position};
use thiserror::Error;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}

/// One piece of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

/// A parsed layout: pieces in reading order (a8..h8, a7..h7, ..., a1..h1).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a piece-placement string.
    pub fn parse(placement: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidPlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut placements = Vec::new();
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - i as i8;
            let mut file = 1i8;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as i8;
                } else if let Some((kind, color)) = PieceKind::from_char(c) {
                    let position = Position::new(file, rank).map_err(|_| {
                        LayoutError::InvalidPlacement(format!("rank {} overflows", rank))
                    })?;
                    placements.push(Placement {
                        kind,
                        color,
                        position,
                    });
                    file += 1;
                } else {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "invalid character '{}' in rank {}",
                        c, rank
                    )));
                }
                if file > 9 {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "rank {} overflows",
                        rank
                    )));
                }
            }
            if file != 9 {
                return Err(LayoutError::InvalidPlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank,
                    file - 1
                )));
            }
        }

        Ok(Layout { placements })
    }

    /// The standard starting layout, parsed.
    pub fn standard() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }

    /// The pieces of the layout.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Renders the layout back into its placement string.
    pub fn to_placement(&self) -> String {
        let mut grid = [[None; 8]; 8];
        for p in &self.placements {
            let (row, col) = p.position.index();
            grid[row][col] = Some(p.kind.to_char(p.color));
        }

        let mut out = String::new();
        for (i, row) in grid.iter().rev().enumerate() {
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some(c) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(*c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if i < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard() {
        let layout = Layout::standard();
        assert_eq!(layout.placements().len(), 32);
        let first = layout.placements()[0];
        assert_eq!(first.kind, PieceKind::Rook);
        assert_eq!(first.color, Color::Black);
        assert_eq!(first.position, Position::A8);
        let last = layout.placements()[31];
        assert_eq!(last.kind, PieceKind::Rook);
        assert_eq!(last.color, Color::White);
        assert_eq!(last.position, Position::H1);
    }

    #[test]
    fn roundtrip() {
        for s in [
            Layout::STANDARD,
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R",
            "8/8/8/8/8/8/8/4K2k",
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        ] {
            assert_eq!(Layout::parse(s).unwrap().to_placement(), s);
        }
    }

    #[test]
    fn invalid_rank_count() {
        assert!(matches!(
            Layout::parse("8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            Layout::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(LayoutError::InvalidPlacement(_))
        ));
        assert!(matches!(
            Layout::parse("8/8/8/8/8/8/8/09"),
            Err(LayoutError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn wrong_square_count() {
        assert!(matches!(
            Layout::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(LayoutError::InvalidPlacement(_))
        ));
        assert!(matches!(
            Layout::parse("7/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPlacement(_))
        ));
        assert!(matches!(
            Layout::parse("44p/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn error_display() {
        let err = LayoutError::InvalidPlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}
