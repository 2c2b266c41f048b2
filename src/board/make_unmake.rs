use log::trace;

use super::error::MoveError;
use super::movegen::Candidate;
use super::state::GameState;
use super::types::{
    CastlingSide, Color, Destination, Move, MoveRecord, Piece, PieceKind, Square,
};

impl GameState {
    /// Apply a move for the side on move.
    ///
    /// `promotion` is only consulted when a pawn reaches the last rank;
    /// `None` or a kind a pawn cannot become promotes to a queen.
    /// On error nothing changes.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color != self.current_player {
            return Err(MoveError::NotSideToMove { square: from });
        }
        let Some(dest) = self
            .legal_destinations_for(from, piece)
            .into_iter()
            .find(|d| d.to == to)
        else {
            trace!("rejected {from}{to}: not a legal destination");
            return Err(MoveError::IllegalDestination { from, to });
        };

        self.execute(from, piece, dest, promotion);
        Ok(())
    }

    /// `apply_move` taking a `Move`
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply_move(mv.from, mv.to, mv.promotion)
    }

    /// Play a candidate produced by `candidates()` on this same position.
    pub(crate) fn play_candidate(&mut self, candidate: &Candidate) {
        self.execute(
            candidate.mv.from,
            candidate.piece,
            candidate.dest,
            candidate.mv.promotion,
        );
    }

    fn execute(
        &mut self,
        from: Square,
        mut piece: Piece,
        dest: Destination,
        promotion: Option<PieceKind>,
    ) {
        let previous_castling_rights = self.castling_rights;
        let previous_en_passant = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let color = piece.color;
        let moved_kind = piece.kind;
        let to = dest.to;

        self.board.set(from, None);
        let captured = if dest.en_passant {
            self.board.take(Square(from.row(), to.col()))
        } else {
            self.board.take(to)
        };
        if let Some(victim) = captured {
            self.captured_pieces[victim.color.index()].push(victim);
            // Not only king and rook moves clear rights: a rook captured on
            // its home corner takes that side's right with it.
            if victim.kind == PieceKind::Rook && to.row() == victim.color.back_row() {
                match to.col() {
                    0 => self.castling_rights.remove(victim.color, CastlingSide::QueenSide),
                    7 => self.castling_rights.remove(victim.color, CastlingSide::KingSide),
                    _ => {}
                }
            }
        }

        self.en_passant_target =
            if moved_kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
                Some(Square((from.row() + to.row()) / 2, from.col()))
            } else {
                None
            };

        let promoted = if moved_kind == PieceKind::Pawn && to.row() == color.promotion_row() {
            let kind = promotion
                .filter(|k| k.is_promotion_target())
                .unwrap_or(PieceKind::Queen);
            piece.kind = kind;
            Some(kind)
        } else {
            None
        };

        if let Some(side) = dest.castling {
            let row = from.row();
            let mut rook = self.board.take(Square(row, side.rook_home_col()));
            if let Some(r) = rook.as_mut() {
                r.has_moved = true;
            }
            self.board.set(Square(row, side.rook_target_col()), rook);
        }

        match moved_kind {
            PieceKind::King => self.castling_rights.remove_color(color),
            PieceKind::Rook => match from.col() {
                0 => self.castling_rights.remove(color, CastlingSide::QueenSide),
                7 => self.castling_rights.remove(color, CastlingSide::KingSide),
                _ => {}
            },
            _ => {}
        }

        if piece.kind.tracks_has_moved() {
            piece.has_moved = true;
        }
        self.board.set(to, Some(piece));

        if moved_kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.move_history.push(MoveRecord {
            piece,
            from,
            to,
            captured,
            en_passant: dest.en_passant,
            castling: dest.castling,
            promotion: promoted,
            was_check: false,
            was_checkmate: false,
            previous_castling_rights,
            previous_en_passant,
            previous_halfmove_clock,
            previous_fullmove_number,
        });

        self.current_player = color.opponent();
        self.refresh_status();

        let (check, checkmate) = (self.check, self.checkmate);
        if let Some(last) = self.move_history.last_mut() {
            last.was_check = check;
            last.was_checkmate = checkmate;
        }
    }

    /// Take back the most recent move. Returns `None` on an empty history.
    ///
    /// `has_moved` is cleared on a pawn, rook or king that is moved back,
    /// even if it had already moved earlier in the game.
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let record = self.move_history.pop()?;
        self.current_player = record.piece.color;

        let mut piece = record.piece;
        if record.promotion.is_some() {
            piece.kind = PieceKind::Pawn;
        }
        if piece.kind.tracks_has_moved() {
            piece.has_moved = false;
        }
        self.board.set(record.to, None);
        self.board.set(record.from, Some(piece));

        if let Some(victim) = record.captured {
            let at = if record.en_passant {
                Square(record.from.row(), record.to.col())
            } else {
                record.to
            };
            self.board.set(at, Some(victim));
            self.captured_pieces[victim.color.index()].pop();
        }

        if let Some(side) = record.castling {
            let row = record.from.row();
            let mut rook = self.board.take(Square(row, side.rook_target_col()));
            if let Some(r) = rook.as_mut() {
                r.has_moved = false;
            }
            self.board.set(Square(row, side.rook_home_col()), rook);
        }

        self.castling_rights = record.previous_castling_rights;
        self.en_passant_target = record.previous_en_passant;
        self.halfmove_clock = record.previous_halfmove_clock;
        self.fullmove_number = record.previous_fullmove_number;

        self.refresh_status();
        Some(record)
    }

    /// Recompute check, checkmate and stalemate for the side on move.
    pub(crate) fn refresh_status(&mut self) {
        let color = self.current_player;
        self.check = self.board.king_attacked(color);
        let can_move = self.has_any_legal_move(color);
        self.checkmate = !can_move && self.check;
        self.stalemate = !can_move && !self.check;
    }
}
