use super::state::GameState;

impl GameState {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let candidates = self.candidates();
        if depth == 1 {
            return candidates.len() as u64;
        }

        let mut nodes = 0;
        for candidate in &candidates {
            self.play_candidate(candidate);
            nodes += self.perft(depth - 1);
            self.undo_last_move();
        }

        nodes
    }
}
