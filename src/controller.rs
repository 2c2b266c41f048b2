//! Game controller: one shared game plus background move selection.
//!
//! The game lives behind a mutex so a search thread can run while the
//! caller keeps handling input. A search works on a snapshot; its result is
//! only applied if the game is still in the position the search started
//! from.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{
    Destination, Difficulty, GameState, Move, MoveError, MoveParseError, MoveRecord, PieceKind,
    SearchResult, Searcher, Square,
};

/// A search running on its own thread
pub struct SearchJob {
    handle: JoinHandle<SearchResult>,
    /// Position the search started from
    position: String,
    history_len: usize,
}

impl SearchJob {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// What `commit` did with a finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The move was applied to the game
    Played(Move),
    /// The game changed while searching; nothing was applied
    Stale,
    /// The side to move has no legal move
    NoMove,
}

/// Owns the live game and the searcher that plays against the user.
pub struct GameController {
    game: Arc<Mutex<GameState>>,
    searcher: Searcher,
    difficulty: Difficulty,
}

impl GameController {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        GameController {
            game: Arc::new(Mutex::new(GameState::new())),
            searcher: Searcher::new(difficulty),
            difficulty,
        }
    }

    /// Use a custom searcher, e.g. a fixed shallow depth.
    #[must_use]
    pub fn with_searcher(searcher: Searcher) -> Self {
        GameController {
            game: Arc::new(Mutex::new(GameState::new())),
            searcher,
            difficulty: Difficulty::default(),
        }
    }

    /// Handle to the live game for callers that hold it across threads
    #[must_use]
    pub fn shared_game(&self) -> Arc<Mutex<GameState>> {
        Arc::clone(&self.game)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.game.lock().clone()
    }

    pub fn with_game<T>(&self, f: impl FnOnce(&GameState) -> T) -> T {
        f(&self.game.lock())
    }

    pub fn new_game(&self) {
        self.game.lock().initialize();
        info!("new game");
    }

    pub fn set_position(&self, state: GameState) {
        *self.game.lock() = state;
    }

    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        self.game.lock().apply_move(from, to, promotion)
    }

    /// Apply a move given in coordinate notation
    pub fn play(&self, text: &str) -> Result<Move, MoveParseError> {
        self.game.lock().apply_coordinate_move(text)
    }

    pub fn undo(&self) -> Option<MoveRecord> {
        self.game.lock().undo_last_move()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the search depth; evaluation weights are kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.searcher = Searcher::new(difficulty).with_weights(*self.searcher.weights());
        info!(
            "difficulty set to {} (depth {})",
            difficulty.level(),
            difficulty.depth()
        );
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Start searching the current position on a background thread.
    pub fn spawn_search(&self) -> io::Result<SearchJob> {
        let snapshot = self.snapshot();
        let position = snapshot.export_position();
        let history_len = snapshot.move_history().len();
        let searcher = self.searcher.clone();

        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || searcher.search(&snapshot))?;

        Ok(SearchJob {
            handle,
            position,
            history_len,
        })
    }

    /// Wait for `job` and apply its move if the game has not moved on.
    ///
    /// A search that found nothing, or whose move no longer applies, falls
    /// back to a random legal move.
    pub fn commit(&self, job: SearchJob) -> Commit {
        let SearchJob {
            handle,
            position,
            history_len,
        } = job;

        let best = match handle.join() {
            Ok(result) => result.best_move,
            Err(_) => {
                warn!("search thread panicked");
                None
            }
        };

        let mut game = self.game.lock();
        if game.move_history().len() != history_len || game.export_position() != position {
            debug!("discarding search result: position changed");
            return Commit::Stale;
        }

        if let Some(mv) = best {
            match game.make_move(mv) {
                Ok(()) => return Commit::Played(mv),
                Err(e) => warn!("search move {mv} rejected: {e}"),
            }
        }

        match random_legal_move(&game, &mut rand::thread_rng()) {
            Some(mv) => {
                warn!("falling back to random move {mv}");
                match game.make_move(mv) {
                    Ok(()) => Commit::Played(mv),
                    Err(_) => Commit::NoMove,
                }
            }
            None => Commit::NoMove,
        }
    }

    /// Search the current position and play the result.
    pub fn think(&self) -> io::Result<Commit> {
        let job = self.spawn_search()?;
        Ok(self.commit(job))
    }
}

impl Default for GameController {
    fn default() -> Self {
        GameController::new(Difficulty::default())
    }
}

/// Pick a random piece of the side to move that can move, then one of its
/// destinations. Promotions are left to the default (queen).
pub fn random_legal_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<Move> {
    let color = state.current_player();
    let movable: Vec<(Square, Vec<Destination>)> = state
        .board()
        .pieces()
        .filter(|(_, p)| p.color == color)
        .map(|(sq, _)| (sq, state.legal_moves(sq)))
        .filter(|(_, dests)| !dests.is_empty())
        .collect();

    let (from, dests) = movable.choose(rng)?;
    let dest = dests.choose(rng)?;
    Some(Move::new(*from, dest.to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shallow() -> GameController {
        GameController::with_searcher(Searcher::with_depth(2))
    }

    #[test]
    fn test_think_plays_for_side_to_move() {
        let controller = shallow();
        controller.play("e2e4").unwrap();
        let commit = controller.think().unwrap();
        assert!(matches!(commit, Commit::Played(_)));
        controller.with_game(|g| {
            assert_eq!(g.move_history().len(), 2);
            assert_eq!(g.current_player(), crate::board::Color::White);
        });
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let controller = shallow();
        let job = controller.spawn_search().unwrap();
        controller.play("d2d4").unwrap();
        assert_eq!(controller.commit(job), Commit::Stale);
        controller.with_game(|g| assert_eq!(g.move_history().len(), 1));
    }

    #[test]
    fn test_no_move_when_mated() {
        let controller = shallow();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            controller.play(mv).unwrap();
        }
        assert_eq!(controller.think().unwrap(), Commit::NoMove);
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = GameState::new();
        for _ in 0..20 {
            let mv = random_legal_move(&state, &mut rng).unwrap();
            assert!(state.all_legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_set_difficulty_changes_depth() {
        let mut controller = GameController::default();
        assert_eq!(controller.searcher().depth(), 6);
        controller.set_difficulty(Difficulty::new(1));
        assert_eq!(controller.searcher().depth(), 3);
        assert_eq!(controller.difficulty().level(), 1);
    }
}
