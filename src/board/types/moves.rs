//! Move types: destinations, candidate moves and history records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::{CastlingRights, CastlingSide};
use super::piece::{Piece, PieceKind};
use super::square::Square;

/// A destination the piece on some square may legally move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Destination {
    pub to: Square,
    /// The capture removes a pawn beside the moving pawn, not on `to`
    pub en_passant: bool,
    /// Set when this is the king's two-square castling step
    pub castling: Option<CastlingSide>,
}

impl Destination {
    #[inline]
    #[must_use]
    pub(crate) const fn plain(to: Square) -> Self {
        Destination {
            to,
            en_passant: false,
            castling: None,
        }
    }
}

/// A fully specified move request: origin, destination, promotion choice.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

/// Coordinate form (`e2e4`, `e7e8q`), as exchanged with external engines.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// One applied move as kept in the game history.
///
/// `piece` is the moving piece as it stands after the move (promoted kind,
/// `has_moved` set). The `previous_*` fields hold what undo needs to put
/// the position back exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub castling: Option<CastlingSide>,
    pub promotion: Option<PieceKind>,
    pub was_check: bool,
    pub was_checkmate: bool,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl MoveRecord {
    /// The move request that produced this record
    #[must_use]
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }

    /// Kind of the piece before it moved (a pawn if it promoted)
    #[must_use]
    pub fn moved_kind(&self) -> PieceKind {
        if self.promotion.is_some() {
            PieceKind::Pawn
        } else {
            self.piece.kind
        }
    }
}
