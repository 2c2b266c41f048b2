//! Raw piece movement and attack detection.
//!
//! Nothing in this file knows about check, castling or whose turn it is.
//! `is_square_attacked` must stay that way: the filtered generator in
//! `movegen.rs` calls into it, so it may never call back.

use super::state::Board;
use super::types::{Color, Destination, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Pseudo-legal destinations for `piece` standing on `from`.
    ///
    /// Occupancy rules only: own king safety is ignored and castling is
    /// never produced. King destinations are the bare one-step squares.
    pub(crate) fn pseudo_destinations(
        &self,
        from: Square,
        piece: Piece,
        en_passant: Option<Square>,
        out: &mut Vec<Destination>,
    ) {
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece.color, en_passant, out),
            PieceKind::Knight => self.step_destinations(from, piece.color, &KNIGHT_OFFSETS, out),
            PieceKind::King => self.step_destinations(from, piece.color, &KING_OFFSETS, out),
            PieceKind::Bishop => self.ray_destinations(from, piece.color, &BISHOP_DIRECTIONS, out),
            PieceKind::Rook => self.ray_destinations(from, piece.color, &ROOK_DIRECTIONS, out),
            PieceKind::Queen => {
                self.ray_destinations(from, piece.color, &ROOK_DIRECTIONS, out);
                self.ray_destinations(from, piece.color, &BISHOP_DIRECTIONS, out);
            }
        }
    }

    fn pawn_destinations(
        &self,
        from: Square,
        color: Color,
        en_passant: Option<Square>,
        out: &mut Vec<Destination>,
    ) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                out.push(Destination::plain(one));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            out.push(Destination::plain(two));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(target) = from.offset(dir, d_col) else {
                continue;
            };
            if let Some(victim) = self.piece_at(target) {
                if victim.color != color {
                    out.push(Destination::plain(target));
                }
            }
            // The victim stands beside the capturing pawn, not on the target.
            let victim_beside = self
                .piece_at(Square(from.row(), target.col()))
                .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != color);
            if en_passant == Some(target) && victim_beside && self.is_empty(target) {
                out.push(Destination {
                    to: target,
                    en_passant: true,
                    castling: None,
                });
            }
        }
    }

    fn step_destinations(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        out: &mut Vec<Destination>,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = from.offset(d_row, d_col) {
                if self.piece_at(to).map_or(true, |p| p.color != color) {
                    out.push(Destination::plain(to));
                }
            }
        }
    }

    fn ray_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        out: &mut Vec<Destination>,
    ) {
        for &(d_row, d_col) in directions {
            let mut cursor = from.offset(d_row, d_col);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => out.push(Destination::plain(to)),
                    Some(blocker) => {
                        if blocker.color != color {
                            out.push(Destination::plain(to));
                        }
                        break;
                    }
                }
                cursor = to.offset(d_row, d_col);
            }
        }
    }

    /// Whether any piece of color `by` attacks `target`.
    ///
    /// Pawns attack both forward diagonals and kings all adjacent squares,
    /// regardless of what stands there. Other pieces attack what their
    /// pseudo-legal movement reaches.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces()
            .filter(|(_, p)| p.color == by)
            .any(|(from, piece)| self.attacks_from(from, piece, target))
    }

    /// Same answer as searching `pseudo_destinations` for `target`,
    /// without building the list. Kings use plain adjacency. Nothing
    /// attacks a square off the board.
    pub(crate) fn attacks_from(&self, from: Square, piece: Piece, target: Square) -> bool {
        if from == target || !target.is_valid() || !from.is_valid() {
            return false;
        }
        let d_row = target.row() as isize - from.row() as isize;
        let d_col = target.col() as isize - from.col() as isize;
        let own_occupied = self.piece_at(target).is_some_and(|p| p.color == piece.color);

        match piece.kind {
            PieceKind::Pawn => d_row == piece.color.pawn_direction() && d_col.abs() == 1,
            PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
            PieceKind::Knight => {
                !own_occupied && KNIGHT_OFFSETS.contains(&(d_row, d_col))
            }
            PieceKind::Rook => {
                !own_occupied && (d_row == 0 || d_col == 0) && self.ray_is_clear(from, target)
            }
            PieceKind::Bishop => {
                !own_occupied && d_row.abs() == d_col.abs() && self.ray_is_clear(from, target)
            }
            PieceKind::Queen => {
                !own_occupied
                    && (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                    && self.ray_is_clear(from, target)
            }
        }
    }

    /// Squares strictly between two aligned squares are all empty
    fn ray_is_clear(&self, from: Square, target: Square) -> bool {
        let step_row = (target.row() as isize - from.row() as isize).signum();
        let step_col = (target.col() as isize - from.col() as isize).signum();
        let mut cursor = from.offset(step_row, step_col);
        while let Some(sq) = cursor {
            if sq == target {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            cursor = sq.offset(step_row, step_col);
        }
        false
    }

    /// Whether the king of `color` is attacked. A missing king is never in check.
    #[must_use]
    pub fn king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_square_attacked(sq, color.opponent()))
    }
}
