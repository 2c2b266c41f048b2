//! Legal move generation.
//!
//! Two layers: the raw generator in `attacks.rs`, then a filter that plays
//! each candidate on a scratch copy of the board and drops it if the
//! mover's own king ends up attacked. Castling is added here, never in the
//! raw layer.

use super::state::{Board, GameState};
use super::types::{
    CastlingSide, Color, Destination, Move, Piece, PieceKind, Square, PROMOTION_KINDS,
};

/// A legal move together with the mover and its destination details.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub(crate) mv: Move,
    pub(crate) piece: Piece,
    pub(crate) dest: Destination,
}

impl GameState {
    /// Legal destinations for the piece on `sq`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on move.
    #[must_use]
    pub fn legal_moves(&self, sq: Square) -> Vec<Destination> {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.current_player => {
                self.legal_destinations_for(sq, piece)
            }
            _ => Vec::new(),
        }
    }

    /// `legal_moves` by raw coordinates; off-board input yields nothing.
    #[must_use]
    pub fn legal_moves_at(&self, row: usize, col: usize) -> Vec<Destination> {
        Square::new(row, col).map_or_else(Vec::new, |sq| self.legal_moves(sq))
    }

    /// Legal destinations of `piece` on `from`, whichever side is on move.
    ///
    /// The en passant target only applies to the side on move, since it
    /// describes the move that just happened.
    pub(crate) fn legal_destinations_for(&self, from: Square, piece: Piece) -> Vec<Destination> {
        let en_passant = if piece.color == self.current_player {
            self.en_passant_target
        } else {
            None
        };

        let mut out = Vec::with_capacity(28);
        self.board.pseudo_destinations(from, piece, en_passant, &mut out);

        if piece.kind == PieceKind::King {
            let enemy = piece.color.opponent();
            out.retain(|d| !self.board.is_square_attacked(d.to, enemy));
            self.push_castling(from, piece, &mut out);
        }

        out.retain(|d| !leaves_king_attacked(&self.board, from, piece, *d));
        out
    }

    fn push_castling(&self, from: Square, king: Piece, out: &mut Vec<Destination>) {
        let color = king.color;
        let row = color.back_row();
        if king.has_moved || from != Square(row, 4) {
            return;
        }
        let enemy = color.opponent();
        if self.board.is_square_attacked(from, enemy) {
            return;
        }

        for side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let rook_ok = self
                .board
                .piece_at(Square(row, side.rook_home_col()))
                .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color && !p.has_moved);
            if !rook_ok {
                continue;
            }

            let (mut between, passing) = match side {
                CastlingSide::KingSide => (5..=6, 5),
                CastlingSide::QueenSide => (1..=3, 3),
            };
            if between.any(|col| !self.board.is_empty(Square(row, col))) {
                continue;
            }
            if self.board.is_square_attacked(Square(row, passing), enemy) {
                continue;
            }

            out.push(Destination {
                to: Square(row, side.king_target_col()),
                en_passant: false,
                castling: Some(side),
            });
        }
    }

    /// Every legal move for the side on move, in board-scan order.
    ///
    /// Pawn moves onto the last rank expand into one move per promotion
    /// choice (queen, rook, bishop, knight).
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.candidates().into_iter().map(|c| c.mv).collect()
    }

    /// `all_legal_moves` with the generator's destination details kept,
    /// so they can be played without validating again.
    pub(crate) fn candidates(&self) -> Vec<Candidate> {
        let mut out = Vec::with_capacity(48);
        for (from, piece) in self.board.pieces() {
            if piece.color != self.current_player {
                continue;
            }
            for dest in self.legal_destinations_for(from, piece) {
                if piece.kind == PieceKind::Pawn && dest.to.row() == piece.color.promotion_row() {
                    for kind in PROMOTION_KINDS {
                        out.push(Candidate {
                            mv: Move::with_promotion(from, dest.to, kind),
                            piece,
                            dest,
                        });
                    }
                } else {
                    out.push(Candidate {
                        mv: Move::new(from, dest.to),
                        piece,
                        dest,
                    });
                }
            }
        }
        out
    }

    /// Number of legal destinations for `color` (promotions count once)
    #[must_use]
    pub fn legal_move_count(&self, color: Color) -> usize {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(sq, p)| self.legal_destinations_for(sq, p).len())
            .sum()
    }

    pub(crate) fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == color)
            .any(|(sq, p)| !self.legal_destinations_for(sq, p).is_empty())
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.king_attacked(color)
    }

    /// Whether `by` attacks `sq` in the current position
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.board.is_square_attacked(sq, by)
    }
}

/// Play `dest` on a scratch copy and report whether the mover's king is attacked.
fn leaves_king_attacked(board: &Board, from: Square, piece: Piece, dest: Destination) -> bool {
    let mut scratch = *board;
    scratch.set(from, None);
    if dest.en_passant {
        scratch.set(Square(from.row(), dest.to.col()), None);
    }
    if let Some(side) = dest.castling {
        let row = from.row();
        let rook = scratch.take(Square(row, side.rook_home_col()));
        scratch.set(Square(row, side.rook_target_col()), rook);
    }
    scratch.set(dest.to, Some(piece));
    scratch.king_attacked(piece.color)
}
