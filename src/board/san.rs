//! Algebraic move notation for the move list.
//!
//! Renders "e4", "Nf3", "exd5", "O-O", "e8=Q#". Two pieces of the same kind
//! that can reach the same square render identically: no file or rank
//! disambiguation is added.

use super::state::GameState;
use super::types::{CastlingSide, MoveRecord, PieceKind};

impl GameState {
    /// Format a recorded move in algebraic notation.
    ///
    /// Check and mate markers come from the flags stamped on the record
    /// when it was applied.
    #[must_use]
    pub fn render_move_notation(&self, record: &MoveRecord) -> String {
        let mut san = String::new();

        match record.castling {
            Some(CastlingSide::KingSide) => san.push_str("O-O"),
            Some(CastlingSide::QueenSide) => san.push_str("O-O-O"),
            None => {
                let kind = record.moved_kind();
                if kind != PieceKind::Pawn {
                    san.push(kind.to_char().to_ascii_uppercase());
                }

                if record.captured.is_some() || record.en_passant {
                    if kind == PieceKind::Pawn {
                        san.push(record.from.file_char());
                    }
                    san.push('x');
                }

                san.push_str(&record.to.to_string());

                if let Some(promo) = record.promotion {
                    san.push('=');
                    san.push(promo.to_char().to_ascii_uppercase());
                }
            }
        }

        if record.was_checkmate {
            san.push('#');
        } else if record.was_check {
            san.push('+');
        }

        san
    }

    /// Notation for every move played so far, in order
    #[must_use]
    pub fn history_notation(&self) -> Vec<String> {
        self.move_history
            .iter()
            .map(|record| self.render_move_notation(record))
            .collect()
    }
}
