//! Move execution.
//!
//! [`apply`] performs a move on a board without checking its legality; the
//! caller must have validated it with [`referee::legal_moves`](crate::referee::legal_moves).

use crate::board::Board;
use crate::event::Event;
use crate::piece::PieceId;
use crate::sequence::{MoveRecord, Special};
use crate::RulesError;
use chess_core::{Color, PieceKind, Position};

/// Applies `event` to `board`: resolves the capture, relocates the piece,
/// performs castling and promotion side effects, appends the move to the
/// history and passes the turn.
///
/// Fails only if the departure square is empty.
pub fn apply(board: &mut Board, event: Event) -> Result<MoveRecord, RulesError> {
    let from = event.from();
    let to = event.to();
    let Some(id) = event.depart.occupant() else {
        return Err(RulesError::IllegalMove { from, to });
    };
    let (kind, color) = {
        let piece = board.piece(id);
        (piece.kind, piece.color)
    };

    let mut special = None;
    let captured = if event.capture {
        capture_at(board, color.opposite(), to)
    } else if kind == PieceKind::Pawn && from.file() != to.file() {
        let captured_at = Position::new(to.file(), from.rank())?;
        let victim = capture_at(board, color.opposite(), captured_at);
        if victim.is_some() {
            special = Some(Special::EnPassant { captured_at });
        }
        victim
    } else {
        None
    };

    relocate(board, id, to);

    if kind == PieceKind::King && (to.file() - from.file()).abs() == 2 {
        let kingside = to.file() > from.file();
        let rook_from = Position::new(if kingside { 8 } else { 1 }, from.rank())?;
        let rook_file = if kingside { to.file() - 1 } else { to.file() + 1 };
        let rook_to = Position::new(rook_file, from.rank())?;
        if let Some(rook) = board.id_at(rook_from) {
            relocate(board, rook, rook_to);
            special = Some(Special::Castle {
                rook,
                rook_from,
                rook_to,
            });
        }
    } else if kind == PieceKind::Pawn && to.rank() == color.promotion_rank() {
        board.piece_mut(id).kind = PieceKind::Queen;
        special = Some(Special::Promotion(PieceKind::Queen));
    } else if kind == PieceKind::Pawn && (to.rank() - from.rank()).abs() == 2 {
        special = Some(Special::DoubleStep);
    }

    let record = MoveRecord {
        piece: id,
        kind,
        color,
        from,
        to,
        captured,
        special,
    };
    board.sequence.push(record);
    board.side_to_move = color.opposite();

    tracing::trace!(%record, ?special, "executed");
    Ok(record)
}

/// Moves the `victim_color` piece standing on `at`, if any, from the active
/// roster into the captured list. Matches by position, not identity.
fn capture_at(board: &mut Board, victim_color: Color, at: Position) -> Option<PieceId> {
    let pieces = &board.pieces;
    let roster = &mut board.active[victim_color.index()];
    let slot = roster
        .iter()
        .position(|&id| pieces[id.index()].position == at)?;
    let victim = roster.remove(slot);

    board.pieces[victim.index()].active = false;
    board.captured[victim_color.index()].push(victim);
    let (row, col) = at.index();
    board.grid[row][col] = None;
    Some(victim)
}

fn relocate(board: &mut Board, id: PieceId, to: Position) {
    let from = board.piece(id).position;
    let (row, col) = from.index();
    board.grid[row][col] = None;
    let (row, col) = to.index();
    board.grid[row][col] = Some(id);
    board.piece_mut(id).position = to;
}
