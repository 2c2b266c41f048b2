//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - (row, col) board coordinate
//! - `Move`, `Destination` and `MoveRecord` - move requests and history
//! - `CastlingRights` and `CastlingSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingSide};
pub use moves::{Destination, Move, MoveRecord};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
