//! Static evaluation.
//!
//! A weighted sum of six terms, each computed as own contribution minus
//! the opponent's:
//! - material
//! - piece-square tables
//! - mobility (legal destinations)
//! - occupation of the four centre squares
//! - knights and bishops developed off their home squares, opening only
//! - king safety (king's own legal moves, a penalty while in check)
//!
//! Scores are in tenths of a centipawn so the fractional weights stay exact.

use super::pst::square_value;
use super::state::GameState;
use super::types::{Color, PieceKind, Square};

const MOBILITY_PER_MOVE: i32 = 10;
const CENTER_BONUS: i32 = 30;
const DEVELOPMENT_BONUS: i32 = 50;
const KING_MOVE_BONUS: i32 = 20;
const IN_CHECK_PENALTY: i32 = 100;

/// Opening lasts while fewer than this many moves were played...
const OPENING_MAX_MOVES: usize = 20;
/// ...and fewer than this many minor pieces are developed (both sides)
const OPENING_MAX_DEVELOPED: usize = 6;

/// Non-pawn, non-king material below which a side is in the endgame
const ENDGAME_MATERIAL: i32 = 830;

const CENTER_SQUARES: [Square; 4] = [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

/// Term weights in tenths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    pub material: i32,
    pub position: i32,
    pub mobility: i32,
    pub center: i32,
    pub development: i32,
    pub king_safety: i32,
    /// Read the late-game king table once a side is short of material
    pub use_endgame_king_table: bool,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            material: 10,
            position: 3,
            mobility: 1,
            center: 2,
            development: 2,
            king_safety: 3,
            use_endgame_king_table: false,
        }
    }
}

/// Unweighted terms, each signed from the perspective color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalTerms {
    pub material: i32,
    pub position: i32,
    pub mobility: i32,
    pub center: i32,
    pub development: i32,
    pub king_safety: i32,
}

impl EvalTerms {
    #[must_use]
    pub fn weighted(&self, weights: &EvalWeights) -> i32 {
        self.material * weights.material
            + self.position * weights.position
            + self.mobility * weights.mobility
            + self.center * weights.center
            + self.development * weights.development
            + self.king_safety * weights.king_safety
    }
}

impl GameState {
    /// Evaluate with the default weights from `perspective`'s side.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.evaluate_with(perspective, &EvalWeights::default())
    }

    #[must_use]
    pub fn evaluate_with(&self, perspective: Color, weights: &EvalWeights) -> i32 {
        self.eval_terms(perspective, weights.use_endgame_king_table && self.is_endgame())
            .weighted(weights)
    }

    /// Compute every term separately.
    #[must_use]
    pub fn eval_terms(&self, perspective: Color, endgame_king: bool) -> EvalTerms {
        let mut terms = EvalTerms::default();
        let opening = self.is_opening();

        for color in Color::BOTH {
            let sign = if color == perspective { 1 } else { -1 };

            let mut material = 0;
            let mut position = 0;
            let mut development = 0;
            for (sq, piece) in self.board.pieces().filter(|(_, p)| p.color == color) {
                material += piece.kind.value();
                position += square_value(color, piece.kind, sq, endgame_king);
                if opening && is_developed(color, piece.kind, sq) {
                    development += DEVELOPMENT_BONUS;
                }
            }

            let center = CENTER_SQUARES
                .iter()
                .filter(|sq| self.board.piece_at(**sq).is_some_and(|p| p.color == color))
                .count() as i32
                * CENTER_BONUS;

            let mobility = self.legal_move_count(color) as i32 * MOBILITY_PER_MOVE;

            let mut king_safety = 0;
            if let Some(king_sq) = self.board.king_square(color) {
                if let Some(king) = self.board.piece_at(king_sq) {
                    king_safety +=
                        self.legal_destinations_for(king_sq, king).len() as i32 * KING_MOVE_BONUS;
                }
                if self.board.is_square_attacked(king_sq, color.opponent()) {
                    king_safety -= IN_CHECK_PENALTY;
                }
            }

            terms.material += sign * material;
            terms.position += sign * position;
            terms.mobility += sign * mobility;
            terms.center += sign * center;
            terms.development += sign * development;
            terms.king_safety += sign * king_safety;
        }

        terms
    }

    /// Opening phase: short history and few developed minor pieces
    #[must_use]
    pub fn is_opening(&self) -> bool {
        if self.move_history.len() >= OPENING_MAX_MOVES {
            return false;
        }
        let developed = self
            .board
            .pieces()
            .filter(|(sq, p)| is_developed(p.color, p.kind, *sq))
            .count();
        developed < OPENING_MAX_DEVELOPED
    }

    /// Either side has less non-pawn material than a rook and a bishop
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        let mut material = [0; 2];
        for (_, piece) in self.board.pieces() {
            if !matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
                material[piece.color.index()] += piece.kind.value();
            }
        }
        material.iter().any(|&m| m < ENDGAME_MATERIAL)
    }
}

/// A knight or bishop that is not standing on one of its home squares
fn is_developed(color: Color, kind: PieceKind, sq: Square) -> bool {
    let home_cols: [usize; 2] = match kind {
        PieceKind::Knight => [1, 6],
        PieceKind::Bishop => [2, 5],
        _ => return false,
    };
    sq.row() != color.back_row() || !home_cols.contains(&sq.col())
}
