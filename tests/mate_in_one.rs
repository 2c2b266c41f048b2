use serde::Deserialize;

use chess_opponent::board::{GameState, Searcher};
use chess_opponent::protocol::Session;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn load_problems() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

fn coordinate_from_problem_moves(moves: &str) -> String {
    moves.replace('-', "")
}

#[test]
fn mate_in_one_solutions_mate() {
    for problem in load_problems()
        .problems
        .iter()
        .filter(|p| p.kind == "Mate in One")
    {
        let mv = coordinate_from_problem_moves(&problem.moves);
        let mut session = Session::with_depth(1);
        let mut out = Vec::new();
        session
            .handle_line(&format!("position fen {} moves {mv}", problem.fen), &mut out)
            .unwrap();
        assert!(out.is_empty(), "unexpected output: {}", String::from_utf8_lossy(&out));

        assert!(
            session.controller().with_game(GameState::is_checkmate),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn searcher_finds_every_mate_in_one() {
    for problem in load_problems()
        .problems
        .iter()
        .filter(|p| p.kind == "Mate in One")
    {
        let state = GameState::try_from_fen(&problem.fen).unwrap();
        let result = Searcher::with_depth(2).search(&state);
        assert!(result.mate_found, "no mate found for {}", problem.fen);

        let mut after = state.clone();
        after.make_move(result.best_move.unwrap()).unwrap();
        assert!(after.is_checkmate(), "{} does not mate", result.best_move.unwrap());
    }
}

#[test]
fn stalemate_trap_is_avoided() {
    for problem in load_problems()
        .problems
        .iter()
        .filter(|p| p.kind == "Stalemate Trap")
    {
        let mut state = GameState::try_from_fen(&problem.fen).unwrap();
        state
            .apply_coordinate_move(&coordinate_from_problem_moves(&problem.moves))
            .unwrap();
        assert!(state.is_stalemate());

        let before = GameState::try_from_fen(&problem.fen).unwrap();
        let choice = Searcher::with_depth(1).select_move(&before).unwrap();
        let mut after = before.clone();
        after.make_move(choice).unwrap();
        assert!(!after.is_stalemate(), "engine stalemated with {choice}");
    }
}
