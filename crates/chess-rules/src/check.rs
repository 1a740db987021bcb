//! Check, checkmate and stalemate detection.

use crate::board::Board;
use crate::referee;
use chess_core::Color;

/// Returns true if any opposing piece attacks the king of `color`.
///
/// Attacks are computed with self-check allowed: a pinned piece still gives
/// check. A side without a king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king(color) else {
        return false;
    };
    let target = board.piece(king).position();
    board.active(color.opposite()).iter().any(|&id| {
        referee::legal_moves(board, id, true)
            .iter()
            .any(|sq| sq.position() == target)
    })
}

/// Returns true if `color` is in check and no move gets it out.
pub fn in_checkmate(board: &Board, color: Color) -> bool {
    in_check(board, color) && !has_legal_move(board, color)
}

/// Returns true if `color` is not in check and has no legal move.
pub fn in_stalemate(board: &Board, color: Color) -> bool {
    !in_check(board, color) && !has_legal_move(board, color)
}

fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .active(color)
        .iter()
        .any(|&id| !referee::legal_moves(board, id, false).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_quiet() {
        let board = Board::new();
        for color in Color::ALL {
            assert!(!in_check(&board, color));
            assert!(!in_checkmate(&board, color));
            assert!(!in_stalemate(&board, color));
        }
    }

    #[test]
    fn rook_gives_check() {
        let board = Board::from_layout("4r1k1/8/8/8/8/8/8/4K3", Color::White).unwrap();
        assert!(in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn pinned_piece_still_gives_check() {
        // The black knight on d3 is pinned to its king by the rook on a3.
        let board = Board::from_layout("8/8/8/8/8/R2nk3/8/4K3", Color::White).unwrap();
        assert!(in_check(&board, Color::White));
    }

    #[test]
    fn back_rank_mate() {
        let board = Board::from_layout("R5k1/5ppp/8/8/8/8/8/4K3", Color::Black).unwrap();
        assert!(in_check(&board, Color::Black));
        assert!(in_checkmate(&board, Color::Black));
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let board = Board::from_layout("R5k1/5pp1/8/8/8/8/8/4K3", Color::Black).unwrap();
        assert!(in_check(&board, Color::Black));
        assert!(!in_checkmate(&board, Color::Black));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let board = Board::from_layout("7k/5Q2/8/8/8/8/8/4K3", Color::Black).unwrap();
        assert!(!in_check(&board, Color::Black));
        assert!(in_stalemate(&board, Color::Black));
        assert!(!in_checkmate(&board, Color::Black));
    }

    #[test]
    fn no_king_no_check() {
        let board = Board::from_layout("8/8/8/8/8/8/8/R7", Color::White).unwrap();
        assert!(!in_check(&board, Color::Black));
    }
}
