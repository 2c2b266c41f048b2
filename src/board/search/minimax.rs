//! Depth-bounded minimax with optional alpha-beta cutoffs.
//!
//! One mutable position is walked with play/undo; every node sees the
//! position exactly as its own move sequence left it.

use crate::board::eval::EvalWeights;
use crate::board::{Color, GameState};

pub(crate) struct SearchContext<'a> {
    pub(crate) weights: &'a EvalWeights,
    /// Side the scores are computed for
    pub(crate) perspective: Color,
    /// Skip siblings once beta <= alpha
    pub(crate) prune: bool,
    pub(crate) nodes: u64,
}

impl SearchContext<'_> {
    /// Score of `state` searched `depth` more plies.
    ///
    /// `maximizing` is true on plies where `perspective` moves.
    pub(crate) fn minimax(
        &mut self,
        state: &mut GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || state.is_game_over() {
            return state.evaluate_with(self.perspective, self.weights);
        }

        let candidates = state.candidates();

        if maximizing {
            let mut best = i32::MIN;
            for candidate in &candidates {
                state.play_candidate(candidate);
                let score = self.minimax(state, depth - 1, alpha, beta, false);
                state.undo_last_move();

                best = best.max(score);
                alpha = alpha.max(score);
                if self.prune && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for candidate in &candidates {
                state.play_candidate(candidate);
                let score = self.minimax(state, depth - 1, alpha, beta, true);
                state.undo_last_move();

                best = best.min(score);
                beta = beta.min(score);
                if self.prune && beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
