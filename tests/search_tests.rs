//! Search tests to verify the engine picks sensible moves.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_opponent::board::{Color, GameState, Searcher};
use chess_opponent::controller::{random_legal_move, Commit, GameController};

/// Test that the engine finds a back-rank mate
#[test]
fn finds_mate_in_one_back_rank() {
    let state = GameState::try_from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let mv = Searcher::with_depth(3).select_move(&state).expect("Should find a move");
    assert_eq!(mv.to_string(), "e1e8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine captures a loose queen
#[test]
fn captures_free_queen() {
    let state = GameState::try_from_fen("4k3/8/8/3q4/8/2N5/8/3RK3 w - - 0 1").unwrap();
    let mv = Searcher::with_depth(2).select_move(&state).expect("Should find a move");
    assert_eq!(mv.to.to_string(), "d5", "Should take the queen, got {mv}");
}

/// Test that the engine avoids putting its queen en prise
#[test]
fn avoids_hanging_queen() {
    let state = GameState::try_from_fen(
        "r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3",
    )
    .unwrap();
    let mv = Searcher::with_depth(2).select_move(&state).expect("Should find a move");
    assert_ne!(mv.to_string(), "f3c6", "Should not hang the queen on c6");
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    let state = GameState::try_from_fen("7k/8/8/8/8/8/1r6/K6r w - - 0 1").unwrap();
    assert_eq!(state.all_legal_moves().len(), 1);
    let mv = Searcher::with_depth(3).select_move(&state).expect("Should find a move");
    assert_eq!(mv.to_string(), "a1b2", "Only legal move should be Kxb2");
}

/// Test that search returns None for checkmate position
#[test]
fn no_move_in_checkmate() {
    let state =
        GameState::try_from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1")
            .unwrap();
    assert!(state.is_checkmate(), "Position should be checkmate");
    assert!(Searcher::with_depth(3).select_move(&state).is_none());
}

/// Test that deeper and shallower searches both return legal moves
#[test]
fn depth_consistency() {
    let state = GameState::new();
    let legal = state.all_legal_moves();
    for depth in 1..=3 {
        let mv = Searcher::with_depth(depth).select_move(&state).unwrap();
        assert!(legal.contains(&mv), "depth {depth} move {mv} should be legal");
    }
}

/// Engine versus engine for a few moves; every reply must be legal
#[test]
fn controller_self_play() {
    let controller = GameController::with_searcher(Searcher::with_depth(2));
    for ply in 0..6 {
        let before = controller.snapshot();
        match controller.think().unwrap() {
            Commit::Played(mv) => assert!(before.all_legal_moves().contains(&mv), "ply {ply}"),
            other => panic!("ply {ply}: unexpected {other:?}"),
        }
    }
    controller.with_game(|game| {
        assert_eq!(game.move_history().len(), 6);
        assert_eq!(game.current_player(), Color::White);
    });
}

/// A result computed for an older position is never applied
#[test]
fn stale_search_is_dropped() {
    let controller = GameController::with_searcher(Searcher::with_depth(2));
    controller.play("e2e4").unwrap();
    let job = controller.spawn_search().unwrap();
    controller.new_game();
    assert_eq!(controller.commit(job), Commit::Stale);
    assert_eq!(
        controller.snapshot().export_position(),
        GameState::new().export_position()
    );
}

/// The random fallback only ever proposes legal moves
#[test]
fn random_fallback_is_legal() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::new();
    for _ in 0..40 {
        let Some(mv) = random_legal_move(&state, &mut rng) else {
            break;
        };
        assert!(state.all_legal_moves().iter().any(|m| m.from == mv.from && m.to == mv.to));
        state.make_move(mv).unwrap();
    }

    let forced = GameState::try_from_fen("7k/8/8/8/8/8/1r6/K6r w - - 0 1").unwrap();
    let mv = random_legal_move(&forced, &mut rng).unwrap();
    assert_eq!(mv.to_string(), "a1b2");
}
