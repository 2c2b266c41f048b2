//! Chess rules engine and minimax opponent.
//!
//! - [`board`] - game state, legal moves, evaluation and search
//! - [`controller`] - shared game with background move selection
//! - [`protocol`] - line-oriented text commands

pub mod board;
pub mod controller;
pub mod protocol;

pub use board::{
    Color, Difficulty, GameState, Move, MoveRecord, Piece, PieceKind, SearchResult, Searcher,
    Square,
};
pub use controller::GameController;
