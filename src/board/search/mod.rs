//! Move selection for the automated opponent.
//!
//! - One-ply mate check over every legal move
//! - Fixed-depth minimax with alpha-beta pruning below the root
//! - Static evaluation at depth 0 and at checkmate/stalemate
//!
//! Every root move is searched with a full window, so root scores are
//! exact and the chosen move matches a search without pruning.

mod minimax;
mod params;

use log::debug;

use super::eval::EvalWeights;
use super::{GameState, Move};
use minimax::SearchContext;
pub use params::Difficulty;

/// Outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move; `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the mover's side
    pub score: Option<i32>,
    /// Nodes visited below the root
    pub nodes: u64,
    /// The move was taken by the immediate-mate check
    pub mate_found: bool,
}

impl SearchResult {
    fn none() -> Self {
        SearchResult {
            best_move: None,
            score: None,
            nodes: 0,
            mate_found: false,
        }
    }
}

/// Fixed-depth searcher. Holds no game state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Searcher {
    depth: u32,
    weights: EvalWeights,
}

impl Searcher {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Searcher::with_depth(difficulty.depth())
    }

    /// Search exactly `depth` plies (at least one)
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Searcher {
            depth: depth.max(1),
            weights: EvalWeights::default(),
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Recommended move for the side to move in `state`.
    #[must_use]
    pub fn select_move(&self, state: &GameState) -> Option<Move> {
        self.search(state).best_move
    }

    /// Alpha-beta search; `state` itself is never modified.
    #[must_use]
    pub fn search(&self, state: &GameState) -> SearchResult {
        self.run(state, true)
    }

    /// Same search with pruning disabled
    #[must_use]
    pub fn search_exhaustive(&self, state: &GameState) -> SearchResult {
        self.run(state, false)
    }

    fn run(&self, state: &GameState, prune: bool) -> SearchResult {
        let mut root = state.clone();
        let candidates = root.candidates();
        if candidates.is_empty() {
            return SearchResult::none();
        }

        let mut ctx = SearchContext {
            weights: &self.weights,
            perspective: root.current_player(),
            prune,
            nodes: 0,
        };

        for candidate in &candidates {
            root.play_candidate(candidate);
            let mated = root.is_checkmate();
            let score = mated.then(|| root.evaluate_with(ctx.perspective, ctx.weights));
            root.undo_last_move();
            if mated {
                debug!("mate in one: {}", candidate.mv);
                return SearchResult {
                    best_move: Some(candidate.mv),
                    score,
                    nodes: 0,
                    mate_found: true,
                };
            }
        }

        let mut best: Option<(Move, i32)> = None;
        for candidate in &candidates {
            root.play_candidate(candidate);
            let score = ctx.minimax(&mut root, self.depth - 1, i32::MIN, i32::MAX, false);
            root.undo_last_move();

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate.mv, score));
            }
        }

        let (best_move, score) = match best {
            Some((mv, score)) => (Some(mv), Some(score)),
            None => (None, None),
        };
        debug!(
            "search depth {} nodes {} best {:?} score {:?}",
            self.depth, ctx.nodes, best_move, score
        );

        SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
            mate_found: false,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(Difficulty::default())
    }
}
