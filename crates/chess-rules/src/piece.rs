//! Pieces and their pseudo-legal moves.
//!
//! Pieces live in a single arena owned by the [`Board`](crate::Board); the
//! grid and the per-color rosters refer to them by [`PieceId`].

use chess_core::{Color, PieceKind, Position};

/// Index of a piece in the board's arena. Stable for the lifetime of a game,
/// across clones and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    /// Returns the arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A line of squares in strict distance order from the piece.
pub type Ray = Vec<Position>;

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A piece in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) position: Position,
    pub(crate) active: bool,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            position,
            active: true,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current position. For a captured piece, the square it was taken on.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// False once the piece has been captured.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fixed material value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// The piece's geometric move set grouped into rays, ignoring every other
    /// piece on the board.
    ///
    /// Sliders yield one ray per direction. Knights and kings yield one
    /// single-square ray per offset, so they are never blocked. A pawn yields
    /// its forward ray (one square, or two from its starting rank) followed by
    /// its two diagonal capture squares.
    pub fn rays(&self) -> Vec<Ray> {
        match self.kind {
            PieceKind::Pawn => self.pawn_rays(),
            PieceKind::Knight => self.steps(&KNIGHT_OFFSETS),
            PieceKind::Bishop => self.slides(&BISHOP_DIRS),
            PieceKind::Rook => self.slides(&ROOK_DIRS),
            PieceKind::Queen => {
                let mut rays = self.slides(&BISHOP_DIRS);
                rays.extend(self.slides(&ROOK_DIRS));
                rays
            }
            PieceKind::King => self.steps(&KING_OFFSETS),
        }
    }

    /// All pseudo-legal destinations, in ray order.
    pub fn pseudo_legal(&self) -> Vec<Position> {
        self.rays().into_iter().flatten().collect()
    }

    fn slides(&self, dirs: &[(i8, i8)]) -> Vec<Ray> {
        dirs.iter()
            .map(|&(df, dr)| {
                let mut ray = Vec::new();
                let mut current = self.position;
                while let Some(next) = current.offset(df, dr) {
                    ray.push(next);
                    current = next;
                }
                ray
            })
            .filter(|ray| !ray.is_empty())
            .collect()
    }

    fn steps(&self, offsets: &[(i8, i8)]) -> Vec<Ray> {
        offsets
            .iter()
            .filter_map(|&(df, dr)| self.position.offset(df, dr))
            .map(|pos| vec![pos])
            .collect()
    }

    fn pawn_rays(&self) -> Vec<Ray> {
        let dir = self.color.pawn_direction();
        let mut rays = Vec::with_capacity(3);

        if let Some(one) = self.position.offset(0, dir) {
            let mut forward = vec![one];
            if self.position.rank() == self.color.pawn_rank() {
                forward.extend(self.position.offset(0, 2 * dir));
            }
            rays.push(forward);
        }

        for df in [-1, 1] {
            if let Some(diagonal) = self.position.offset(df, dir) {
                rays.push(vec![diagonal]);
            }
        }

        rays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn sorted(mut v: Vec<Position>) -> Vec<Position> {
        v.sort();
        v
    }

    #[test]
    fn knight_in_corner() {
        let knight = Piece::new(PieceKind::Knight, Color::White, Position::A1);
        assert_eq!(
            sorted(knight.pseudo_legal()),
            sorted(vec![pos("b3"), pos("c2")])
        );
    }

    #[test]
    fn knight_in_center() {
        let knight = Piece::new(PieceKind::Knight, Color::Black, pos("d4"));
        assert_eq!(knight.pseudo_legal().len(), 8);
        assert!(knight.rays().iter().all(|ray| ray.len() == 1));
    }

    #[test]
    fn rook_rays_are_ordered_by_distance() {
        let rook = Piece::new(PieceKind::Rook, Color::White, pos("d4"));
        let rays = rook.rays();
        assert_eq!(rays.len(), 4);
        assert_eq!(rays[0], vec![pos("e4"), pos("f4"), pos("g4"), pos("h4")]);
        assert_eq!(rays[1], vec![pos("d3"), pos("d2"), pos("d1")]);
        assert_eq!(rook.pseudo_legal().len(), 14);
    }

    #[test]
    fn bishop_from_corner_has_one_ray() {
        let bishop = Piece::new(PieceKind::Bishop, Color::White, Position::A1);
        let rays = bishop.rays();
        assert_eq!(rays.len(), 1);
        assert_eq!(rays[0].len(), 7);
        assert_eq!(rays[0][6], Position::H8);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let at = pos("c5");
        let queen = Piece::new(PieceKind::Queen, Color::White, at);
        let mut union = Piece::new(PieceKind::Bishop, Color::White, at).pseudo_legal();
        union.extend(Piece::new(PieceKind::Rook, Color::White, at).pseudo_legal());
        assert_eq!(sorted(queen.pseudo_legal()), sorted(union));
    }

    #[test]
    fn king_on_edge() {
        let king = Piece::new(PieceKind::King, Color::White, Position::E1);
        assert_eq!(king.pseudo_legal().len(), 5);
        assert!(!king.pseudo_legal().contains(&Position::G1));
    }

    #[test]
    fn white_pawn_from_start() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, pos("e2"));
        let rays = pawn.rays();
        assert_eq!(rays[0], vec![pos("e3"), pos("e4")]);
        assert_eq!(rays[1], vec![pos("d3")]);
        assert_eq!(rays[2], vec![pos("f3")]);
    }

    #[test]
    fn black_pawn_advanced() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, pos("a5"));
        assert_eq!(pawn.pseudo_legal(), vec![pos("a4"), pos("b4")]);
    }

    #[test]
    fn piece_values() {
        assert_eq!(
            Piece::new(PieceKind::Queen, Color::Black, Position::D8).value(),
            9
        );
        assert_eq!(
            Piece::new(PieceKind::Pawn, Color::White, pos("a2")).value(),
            1
        );
    }
}
