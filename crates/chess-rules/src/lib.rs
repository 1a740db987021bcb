//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - piece arena, grid, rosters, captures and move history
//! - [`referee::legal_moves`] - legal move generation with pin, en passant
//!   and castling handling
//! - [`check`] - check, checkmate and stalemate detection
//! - [`player::apply`] - move execution, including castling, en passant and
//!   automatic queen promotion
//! - [`RulesConfig`] - TOML configuration for the probe strategy
//!
//! # Architecture
//!
//! Pieces live in a single arena and are referred to by [`PieceId`]. The grid
//! and the per-color rosters both hold ids, so they can never disagree about
//! where a piece stands. Whether a piece has moved is derived from the
//! [`Sequence`] rather than stored.
//!
//! Legality is decided by probing: each candidate move is applied to a
//! scratch board (a clone, or a replay of the history) and rejected if it
//! leaves the mover's king attacked.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Position};
//! use chess_rules::Board;
//!
//! let mut board = Board::new();
//! let e2 = Position::parse("e2").unwrap();
//! assert_eq!(board.legal_moves(e2).len(), 2);
//!
//! board.play("e2", "e4").unwrap();
//! assert!(board.play("e7", "e4").is_err());
//! assert!(!board.in_check(Color::Black));
//! ```

mod board;
pub mod check;
mod config;
mod error;
mod event;
mod piece;
pub mod player;
pub mod referee;
mod sequence;

pub use board::{Board, PieceView, Square};
pub use config::{ConfigError, ProbeStrategy, RulesConfig};
pub use error::RulesError;
pub use event::Event;
pub use piece::{Piece, PieceId, Ray, BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};
pub use referee::legal_moves;
pub use sequence::{MoveRecord, Sequence, Special};
