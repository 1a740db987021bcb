//! Legal move generation.
//!
//! [`legal_moves`] narrows a piece's pseudo-legal rays down to the squares it
//! may actually move to:
//!
//! 1. walk each ray outward, stopping at the first occupied square (kept only
//!    if it holds an opposing piece);
//! 2. pawns: forward squares must be empty, diagonals need an opposing piece or
//!    an en passant opportunity;
//! 3. kings: add castling destinations;
//! 4. drop squares held by the mover's own side;
//! 5. drop moves that leave the mover's king attacked, probing each candidate
//!    on a scratch board.
//!
//! Attack scans run with `allow_self_check` set, which skips steps 3 and 5:
//! castling never captures, and skipping it keeps castling safety and check
//! detection from recursing into each other.

use crate::board::{Board, Square};
use crate::event::Event;
use crate::piece::{Piece, PieceId};
use crate::sequence::Special;
use crate::{check, player};
use chess_core::{PieceKind, Position};

/// Legal destination squares for the piece `id`, in generation order: rays,
/// then castling.
pub fn legal_moves(board: &Board, id: PieceId, allow_self_check: bool) -> Vec<Square> {
    let piece = board.piece(id);
    if !piece.is_active() {
        return Vec::new();
    }

    let mut moves = match piece.kind() {
        PieceKind::Pawn => pawn_squares(board, piece),
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => piece
            .rays()
            .into_iter()
            .flat_map(|ray| walk_ray(board, piece, &ray))
            .collect(),
    };

    if piece.kind() == PieceKind::King && !allow_self_check {
        moves.extend(castle_squares(board, id));
    }

    moves.retain(|sq| {
        sq.occupant()
            .map_or(true, |other| board.piece(other).color() != piece.color())
    });

    if !allow_self_check {
        moves.retain(|sq| {
            sq.occupant()
                .map_or(true, |other| board.piece(other).kind() != PieceKind::King)
        });
        moves.retain(|sq| {
            let exposed = exposes_king(board, id, sq.position());
            if exposed {
                tracing::trace!(
                    from = %piece.position(),
                    to = %sq.position(),
                    "candidate leaves own king attacked"
                );
            }
            !exposed
        });
    }

    moves
}

/// Squares along `ray` up to and including the first occupied one, which is
/// kept only if it holds an opposing piece.
fn walk_ray(board: &Board, piece: &Piece, ray: &[Position]) -> Vec<Square> {
    let mut out = Vec::new();
    for &position in ray {
        let square = board.square(position);
        match square.occupant() {
            None => out.push(square),
            Some(other) => {
                if board.piece(other).color() != piece.color() {
                    out.push(square);
                }
                break;
            }
        }
    }
    out
}

fn pawn_squares(board: &Board, pawn: &Piece) -> Vec<Square> {
    let mut out = Vec::new();
    for ray in pawn.rays() {
        let Some(&first) = ray.first() else {
            continue;
        };
        if first.file() == pawn.position().file() {
            // A blocked single step also blocks the double step.
            out.extend(
                ray.iter()
                    .map(|&p| board.square(p))
                    .take_while(Square::is_empty),
            );
        } else {
            let square = board.square(first);
            let enemy = square
                .occupant()
                .is_some_and(|other| board.piece(other).color() != pawn.color());
            if enemy || en_passant(board, pawn, first) {
                out.push(square);
            }
        }
    }
    out
}

/// Returns true if `pawn` may capture en passant onto `target`: the last move
/// was an opposing two-square pawn advance landing beside the pawn on the
/// target's file, and the pawn stands on its fifth rank.
pub fn en_passant(board: &Board, pawn: &Piece, target: Position) -> bool {
    let Some(last) = board.sequence().last() else {
        return false;
    };
    let at = pawn.position();
    pawn.kind() == PieceKind::Pawn
        && last.special == Some(Special::DoubleStep)
        && last.color != pawn.color()
        && at.rank() == pawn.color().en_passant_rank()
        && last.to.rank() == at.rank()
        && last.to.file() == target.file()
        && (last.to.file() - at.file()).abs() == 1
}

/// Castling destinations for an un-moved king on its home square.
fn castle_squares(board: &Board, king_id: PieceId) -> Vec<Square> {
    let king = board.piece(king_id);
    let color = king.color();
    let rank = color.back_rank();
    let Ok(home) = Position::new(5, rank) else {
        return Vec::new();
    };
    if king.position() != home || board.has_moved(king_id) {
        return Vec::new();
    }

    let mut out = Vec::new();
    // Kingside (towards the h-file) first, then queenside.
    for (rook_file, dir) in [(8i8, 1i8), (1, -1)] {
        let Ok(corner) = Position::new(rook_file, rank) else {
            continue;
        };
        let rook_ready = board.id_at(corner).is_some_and(|rook| {
            let piece = board.piece(rook);
            piece.kind() == PieceKind::Rook && piece.color() == color && !board.has_moved(rook)
        });
        if !rook_ready {
            continue;
        }

        let (lo, hi) = (home.file().min(rook_file), home.file().max(rook_file));
        let clear = (lo + 1..hi)
            .filter_map(|file| Position::new(file, rank).ok())
            .all(|p| board.square(p).is_empty());
        if !clear {
            continue;
        }

        let Some(landing) = home.offset(2 * dir, 0) else {
            continue;
        };
        let safe = (0..=2)
            .filter_map(|step| home.offset(step * dir, 0))
            .all(|p| king_safe_at(board, king_id, p));
        if safe {
            out.push(board.square(landing));
        }
    }
    out
}

/// Returns true if the king would not be attacked standing on `at`.
fn king_safe_at(board: &Board, king_id: PieceId, at: Position) -> bool {
    let king = board.piece(king_id);
    if at == king.position() {
        return !check::in_check(board, king.color());
    }
    let mut probe = board.probe();
    let event = Event::new(&probe, king.position(), at);
    player::apply(&mut probe, event).is_ok() && !check::in_check(&probe, king.color())
}

/// Returns true if moving `id` to `to` leaves its own king attacked.
fn exposes_king(board: &Board, id: PieceId, to: Position) -> bool {
    let piece = board.piece(id);
    let mut probe = board.probe();
    let event = Event::new(&probe, piece.position(), to);
    match player::apply(&mut probe, event) {
        Ok(_) => check::in_check(&probe, piece.color()),
        Err(_) => true,
    }
}
