//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - apply/undo correctness and rejected moves
//! - `edge_cases.rs` - scripted games and special moves
//! - `movegen.rs` - legal move generation and attack detection
//! - `notation.rs` - FEN import/export and move notation
//! - `eval.rs` - evaluation terms
//! - `search.rs` - move selection
//! - `perft.rs` - move generator node counts
//! - `proptest.rs` - property-based tests

mod edge_cases;

use super::{GameState, Square};

/// Play coordinate moves in order, panicking on the first illegal one.
fn play(state: &mut GameState, moves: &[&str]) {
    for text in moves {
        if let Err(e) = state.apply_coordinate_move(text) {
            panic!("{text} rejected: {e}");
        }
    }
}

fn from_fen(fen: &str) -> GameState {
    GameState::try_from_fen(fen).expect("valid FEN")
}

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}
