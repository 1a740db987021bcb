//! Side representation.

/// The two sides of a game. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index used for per-color tables (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank delta of a single pawn advance (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank on which this color's king and rooks start.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Rank from which this color's pawns may advance two squares.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// The color's fifth rank, the only rank a pawn can capture en passant from.
    #[inline]
    pub const fn en_passant_rank(self) -> i8 {
        match self {
            Color::White => 5,
            Color::Black => 4,
        }
    }

    /// Farthest rank, where this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().back_rank()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn color_index() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn special_ranks() {
        assert_eq!(Color::White.back_rank(), 1);
        assert_eq!(Color::Black.back_rank(), 8);
        assert_eq!(Color::White.pawn_rank(), 2);
        assert_eq!(Color::Black.pawn_rank(), 7);
        assert_eq!(Color::White.en_passant_rank(), 5);
        assert_eq!(Color::Black.en_passant_rank(), 4);
        assert_eq!(Color::White.promotion_rank(), 8);
        assert_eq!(Color::Black.promotion_rank(), 1);
    }

    #[test]
    fn pawns_advance_towards_promotion() {
        for color in Color::ALL {
            let steps = (color.promotion_rank() - color.pawn_rank()) * color.pawn_direction();
            assert_eq!(steps, 6);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
