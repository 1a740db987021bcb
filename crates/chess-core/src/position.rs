//! Board coordinates.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when building a [`Position`] from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("position ({file}, {rank}) out of bounds")]
    OutOfBounds { file: i32, rank: i32 },

    #[error("invalid coordinate format: {0:?}")]
    InvalidFormat(String),
}

/// A square coordinate on the 8x8 board.
///
/// Both `file` (a = 1 .. h = 8) and `rank` (1 .. 8) are one-based and always in
/// range; every constructor validates its input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: i8,
    rank: i8,
}

fn in_bounds(file: i32, rank: i32) -> bool {
    (1..=8).contains(&file) && (1..=8).contains(&rank)
}

impl Position {
    /// Creates a position from one-based file and rank.
    pub fn new(file: i8, rank: i8) -> Result<Self, PositionError> {
        if in_bounds(file.into(), rank.into()) {
            Ok(Position { file, rank })
        } else {
            Err(PositionError::OutOfBounds {
                file: file.into(),
                rank: rank.into(),
            })
        }
    }

    /// Creates a position from a zero-based `(row, col)` grid index.
    pub fn from_index(row: usize, col: usize) -> Result<Self, PositionError> {
        let file = i32::try_from(col).map_or(i32::MAX, |c| c.saturating_add(1));
        let rank = i32::try_from(row).map_or(i32::MAX, |r| r.saturating_add(1));
        if in_bounds(file, rank) {
            Ok(Position {
                file: file as i8,
                rank: rank as i8,
            })
        } else {
            Err(PositionError::OutOfBounds { file, rank })
        }
    }

    /// Creates a position from a file letter and a one-based rank, e.g. `('d', 2)`.
    pub fn from_letter(file: char, rank: i8) -> Result<Self, PositionError> {
        if !file.is_ascii_alphabetic() {
            return Err(PositionError::InvalidFormat(format!("{}{}", file, rank)));
        }
        let file = (file.to_ascii_lowercase() as u8 - b'a') as i8 + 1;
        Self::new(file, rank)
    }

    /// Parses algebraic notation such as `"e4"`.
    pub fn parse(s: &str) -> Result<Self, PositionError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PositionError::InvalidFormat(s.to_string()));
        };
        let Some(rank) = rank.to_digit(10) else {
            return Err(PositionError::InvalidFormat(s.to_string()));
        };
        Self::from_letter(file, rank as i8)
    }

    /// One-based file, a = 1.
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// One-based rank.
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Zero-based `(row, col)` index into a rank-major grid.
    #[inline]
    pub const fn index(self) -> (usize, usize) {
        ((self.rank - 1) as usize, (self.file - 1) as usize)
    }

    /// Returns the position shifted by the given deltas, or `None` off the board.
    #[inline]
    pub fn offset(self, files: i8, ranks: i8) -> Option<Self> {
        let file = self.file.checked_add(files)?;
        let rank = self.rank.checked_add(ranks)?;
        Self::new(file, rank).ok()
    }

    /// File letter, `'a'` to `'h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + (self.file - 1) as u8) as char
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank)
    }

    /// Iterates all 64 positions, rank by rank from a1 to h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Position { file, rank }))
    }

    pub const A1: Position = Position { file: 1, rank: 1 };
    pub const C1: Position = Position { file: 3, rank: 1 };
    pub const D1: Position = Position { file: 4, rank: 1 };
    pub const E1: Position = Position { file: 5, rank: 1 };
    pub const F1: Position = Position { file: 6, rank: 1 };
    pub const G1: Position = Position { file: 7, rank: 1 };
    pub const H1: Position = Position { file: 8, rank: 1 };
    pub const A8: Position = Position { file: 1, rank: 8 };
    pub const C8: Position = Position { file: 3, rank: 8 };
    pub const D8: Position = Position { file: 4, rank: 8 };
    pub const E8: Position = Position { file: 5, rank: 8 };
    pub const F8: Position = Position { file: 6, rank: 8 };
    pub const G8: Position = Position { file: 7, rank: 8 };
    pub const H8: Position = Position { file: 8, rank: 8 };
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = PositionError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        Self::new(file, rank)
    }
}

impl TryFrom<(char, i8)> for Position {
    type Error = PositionError;

    fn try_from((file, rank): (char, i8)) -> Result<Self, Self::Error> {
        Self::from_letter(file, rank)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn position_new() {
        let e4 = Position::new(5, 4).unwrap();
        assert_eq!(e4.file(), 5);
        assert_eq!(e4.rank(), 4);
        assert_eq!(e4.index(), (3, 4));
        assert_eq!(e4.to_algebraic(), "e4");
    }

    #[test]
    fn position_from_index() {
        assert_eq!(Position::from_index(0, 0), Ok(Position::A1));
        assert_eq!(Position::from_index(1, 3), Position::parse("d2"));
        assert_eq!(
            Position::from_index(8, 0),
            Err(PositionError::OutOfBounds { file: 1, rank: 9 })
        );
    }

    #[test]
    fn position_from_letter() {
        assert_eq!(Position::from_letter('d', 2), Position::new(4, 2));
        assert_eq!(Position::from_letter('H', 8), Ok(Position::H8));
        assert!(matches!(
            Position::from_letter('i', 4),
            Err(PositionError::OutOfBounds { file: 9, rank: 4 })
        ));
        assert!(matches!(
            Position::from_letter('?', 4),
            Err(PositionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn position_parse() {
        assert_eq!(Position::parse("a1"), Ok(Position::A1));
        assert_eq!("e8".parse::<Position>(), Ok(Position::E8));
        assert!(matches!(
            Position::parse("i4"),
            Err(PositionError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Position::parse("a9"),
            Err(PositionError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Position::parse("a0"),
            Err(PositionError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Position::parse(""),
            Err(PositionError::InvalidFormat(_))
        ));
        assert!(matches!(
            Position::parse("e44"),
            Err(PositionError::InvalidFormat(_))
        ));
        assert!(matches!(
            Position::parse("ex"),
            Err(PositionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn position_tuples() {
        assert_eq!(Position::try_from((1, 1)), Ok(Position::A1));
        assert_eq!(Position::try_from(('g', 1)), Ok(Position::G1));
        assert!(Position::try_from((0, 1)).is_err());
    }

    #[test]
    fn position_offset() {
        assert_eq!(Position::E1.offset(2, 0), Some(Position::G1));
        assert_eq!(Position::H8.offset(1, 0), None);
        assert_eq!(Position::A1.offset(0, -1), None);
    }

    #[test]
    fn offset_extreme_deltas() {
        assert_eq!(Position::H8.offset(i8::MAX, 0), None);
        assert_eq!(Position::H8.offset(0, i8::MAX), None);
        assert_eq!(Position::A1.offset(i8::MIN, i8::MIN), None);
        assert_eq!(Position::E1.offset(i8::MIN, 0), None);
    }

    #[test]
    fn all_positions() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::A1);
        assert_eq!(all[63], Position::H8);
    }

    #[test]
    fn debug_display() {
        assert_eq!(format!("{:?}", Position::E1), "Position(e1)");
        assert_eq!(format!("{}", Position::C8), "c8");
    }

    proptest! {
        #[test]
        fn parsing_printed_position_is_an_identity(file in 1i8..=8, rank in 1i8..=8) {
            let pos = Position::new(file, rank).unwrap();
            prop_assert_eq!(pos.to_string().parse::<Position>(), Ok(pos));
        }

        #[test]
        fn index_round_trips(row in 0usize..8, col in 0usize..8) {
            let pos = Position::from_index(row, col).unwrap();
            prop_assert_eq!(pos.index(), (row, col));
        }

        #[test]
        fn out_of_range_always_fails(file in any::<i8>(), rank in any::<i8>()) {
            prop_assume!(!(1..=8).contains(&file) || !(1..=8).contains(&rank));
            let is_out_of_bounds = matches!(
                Position::new(file, rank),
                Err(PositionError::OutOfBounds { .. })
            );
            prop_assert!(is_out_of_bounds);
        }

        #[test]
        fn large_indices_fail(row in 8usize.., col in any::<usize>()) {
            prop_assert!(Position::from_index(row, col).is_err());
        }
    }
}
