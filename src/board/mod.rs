//! Chess rules and move selection.
//!
//! An 8x8 mailbox board with complete rules: castling, en passant,
//! promotion, check, checkmate and stalemate. Moves are applied and taken
//! back in place; the searcher walks a private copy with the same
//! apply/undo primitives.
//!
//! # Example
//! ```
//! use chess_opponent::board::{GameState, Searcher, Difficulty};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.all_legal_moves().len(), 20);
//!
//! game.apply_coordinate_move("e2e4").unwrap();
//! let reply = Searcher::with_depth(2).select_move(&game);
//! assert!(reply.is_some());
//! # let _ = Difficulty::default();
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
mod pst;
mod san;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use eval::{EvalTerms, EvalWeights};
pub use search::{Difficulty, SearchResult, Searcher};
pub use state::{Board, GameState};
pub use types::{
    CastlingRights, CastlingSide, Color, Destination, Move, MoveRecord, Piece, PieceKind, Square,
};
