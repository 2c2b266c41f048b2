//! Position export/import and coordinate-move parsing.

use log::trace;

use super::error::{FenError, MoveError, MoveParseError};
use super::state::{Board, GameState};
use super::types::{CastlingRights, CastlingSide, Color, Move, Piece, PieceKind, Square};

impl GameState {
    /// Convert the position to the six-field FEN string.
    #[must_use]
    pub fn export_position(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.board.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.current_player {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a position from FEN notation.
    ///
    /// The history starts empty. `has_moved` is inferred: pawns off their
    /// start row have moved, and kings and rooks count as unmoved only when
    /// a matching castling right is present.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set(Square(row, col), Some(Piece::new(kind, color)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        let current_player = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, CastlingSide::KingSide),
                'Q' => castling_rights.set(Color::White, CastlingSide::QueenSide),
                'k' => castling_rights.set(Color::Black, CastlingSide::KingSide),
                'q' => castling_rights.set(Color::Black, CastlingSide::QueenSide),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        let halfmove_clock = parse_counter(parts.get(4).copied(), 0)?;
        let fullmove_number = parse_counter(parts.get(5).copied(), 1)?.max(1);

        let count_kings = |color| {
            board
                .pieces()
                .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                .count()
        };
        let (white, black) = (count_kings(Color::White), count_kings(Color::Black));
        if white != 1 || black != 1 {
            return Err(FenError::KingCount { white, black });
        }

        if let Some(target) = en_passant_target {
            if !double_step_left(&board, target, current_player.opponent()) {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        }

        infer_has_moved(&mut board, castling_rights);

        let mut state = GameState {
            board,
            current_player,
            castling_rights,
            en_passant_target,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            halfmove_clock,
            fullmove_number,
            check: false,
            checkmate: false,
            stalemate: false,
        };
        state.refresh_status();
        Ok(state)
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q").
    ///
    /// Returns the move only if it is legal in the current position.
    pub fn parse_coordinate_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = chars[0..2]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;
        let to: Square = chars[2..4]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) if matches!(c, 'q' | 'r' | 'b' | 'n') => PieceKind::from_char(c),
            Some(&c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };

        let illegal = |reason| MoveParseError::IllegalMove {
            notation: text.to_string(),
            reason,
        };
        let piece = self
            .board
            .piece_at(from)
            .ok_or_else(|| illegal(MoveError::EmptySquare { square: from }))?;
        if piece.color != self.current_player {
            return Err(illegal(MoveError::NotSideToMove { square: from }));
        }
        if !self.legal_moves(from).iter().any(|d| d.to == to) {
            return Err(illegal(MoveError::IllegalDestination { from, to }));
        }

        Ok(Move {
            from,
            to,
            promotion,
        })
    }

    /// Parse and apply a coordinate move; rejected input changes nothing.
    pub fn apply_coordinate_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_coordinate_move(text).inspect_err(|e| {
            trace!("coordinate move rejected: {e}");
        })?;
        self.make_move(mv).map_err(|reason| MoveParseError::IllegalMove {
            notation: text.to_string(),
            reason,
        })?;
        Ok(mv)
    }
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidCounter {
            found: text.to_string(),
        }),
    }
}

/// Whether a pawn of `mover` can just have stepped two squares over `target`:
/// the target and the pawn's start square are empty and the pawn stands beyond.
fn double_step_left(board: &Board, target: Square, mover: Color) -> bool {
    let dir = mover.pawn_direction();
    let Some(origin) = target.offset(-dir, 0) else {
        return false;
    };
    let Some(landing) = target.offset(dir, 0) else {
        return false;
    };
    origin.row() == mover.pawn_start_row()
        && board.is_empty(origin)
        && board.is_empty(target)
        && board
            .piece_at(landing)
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == mover)
}

fn infer_has_moved(board: &mut Board, rights: CastlingRights) {
    for sq in Square::all() {
        let Some(mut piece) = board.piece_at(sq) else {
            continue;
        };
        let color = piece.color;
        let home_row = color.back_row();
        piece.has_moved = match piece.kind {
            PieceKind::Pawn => sq.row() != color.pawn_start_row(),
            PieceKind::King => {
                sq != Square(home_row, 4)
                    || !(rights.has(color, CastlingSide::KingSide)
                        || rights.has(color, CastlingSide::QueenSide))
            }
            PieceKind::Rook => {
                let side = match (sq.row() == home_row, sq.col()) {
                    (true, 7) => Some(CastlingSide::KingSide),
                    (true, 0) => Some(CastlingSide::QueenSide),
                    _ => None,
                };
                !side.is_some_and(|s| rights.has(color, s))
            }
            _ => false,
        };
        board.set(sq, Some(piece));
    }
}
