//! Core types for the chess rules engine.
//!
//! This crate provides the value types shared by the rules engine and its
//! consumers:
//! - [`Color`] for the two sides
//! - [`PieceKind`] for the six kinds of pieces
//! - [`Position`] for validated board coordinates
//! - [`Layout`] for piece-placement setups

mod color;
mod layout;
mod piece;
mod position;

pub use color::Color;
pub use layout::{Layout, LayoutError, Placement};
pub use piece::PieceKind;
pub use position::{Position, PositionError};
