//! Scripted games and special moves.

use super::{from_fen, play, sq};
use crate::board::{CastlingSide, Color, GameState, MoveError, PieceKind, Square};

#[test]
fn test_twenty_moves_each_side_from_start() {
    let state = GameState::new();
    assert_eq!(state.legal_move_count(Color::White), 20);
    assert_eq!(state.legal_move_count(Color::Black), 20);
    assert_eq!(state.all_legal_moves().len(), 20);
}

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(state.is_check());
    assert!(state.is_checkmate());
    assert!(!state.is_stalemate());
    assert!(state.is_game_over());
    assert_eq!(state.current_player(), Color::White);

    let white: Vec<_> = state
        .board()
        .pieces()
        .filter(|(_, p)| p.color == Color::White)
        .collect();
    assert_eq!(white.len(), 16);
    for (square, _) in white {
        assert!(state.legal_moves(square).is_empty(), "{square} can move");
    }
    assert!(state.last_move().unwrap().was_checkmate);
}

#[test]
fn test_en_passant_capture() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(state.en_passant_target(), Some(sq("d6")));

    let dests = state.legal_moves(sq("e5"));
    let ep = dests.iter().find(|d| d.to == sq("d6")).unwrap();
    assert!(ep.en_passant);

    play(&mut state, &["e5d6"]);
    assert!(state.board().is_empty(sq("d5")));
    assert_eq!(
        state.board().piece_at(sq("d6")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Pawn, Color::White))
    );
    let captured = state.captured_pieces(Color::Black);
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].kind, PieceKind::Pawn);

    let record = state.last_move().unwrap();
    assert!(record.en_passant);
    assert_eq!(record.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(state.en_passant_target(), None);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5", "a2a3", "a6a5"]);
    assert!(state.legal_moves(sq("e5")).iter().all(|d| !d.en_passant));
    assert!(state.apply_coordinate_move("e5d6").is_err());
}

#[test]
fn test_king_side_castling() {
    let mut state = GameState::new();
    play(
        &mut state,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"],
    );

    let king = state.board().piece_at(sq("g1")).unwrap();
    let rook = state.board().piece_at(sq("f1")).unwrap();
    assert_eq!((king.kind, rook.kind), (PieceKind::King, PieceKind::Rook));
    assert!(king.has_moved && rook.has_moved);
    assert!(state.board().is_empty(sq("e1")));
    assert!(state.board().is_empty(sq("h1")));

    assert!(!state.castling_rights().has(Color::White, CastlingSide::KingSide));
    assert!(!state.castling_rights().has(Color::White, CastlingSide::QueenSide));
    assert_eq!(state.move_history().len(), 7);
    assert_eq!(
        state.last_move().unwrap().castling,
        Some(CastlingSide::KingSide)
    );
}

#[test]
fn test_queen_side_castling() {
    let mut state = from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut state, &["e1c1"]);
    assert_eq!(state.board().piece_at(sq("c1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(state.board().piece_at(sq("d1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(state.board().is_empty(sq("a1")));
    assert_eq!(state.castling_rights().to_fen_field(), "kq");
}

#[test]
fn test_castling_blocked_by_attacked_passing_square() {
    let state = from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
    let castles: Vec<_> = state
        .legal_moves(sq("e1"))
        .into_iter()
        .filter_map(|d| d.castling)
        .collect();
    assert_eq!(castles, vec![CastlingSide::QueenSide]);
}

#[test]
fn test_no_castling_out_of_check() {
    let state = from_fen("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(state.is_check());
    assert!(state
        .legal_moves(sq("e1"))
        .iter()
        .all(|d| d.castling.is_none()));
}

#[test]
fn test_queen_side_allows_attacked_rook_path() {
    // b1 must be empty but may be attacked
    let state = from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(state
        .legal_moves(sq("e1"))
        .iter()
        .any(|d| d.castling == Some(CastlingSide::QueenSide)));
}

#[test]
fn test_no_castling_through_pieces() {
    let state = GameState::new();
    assert!(state.legal_moves(sq("e1")).is_empty());
}

#[test]
fn test_rook_move_clears_one_side() {
    let mut state = from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut state, &["h1h4"]);
    assert_eq!(state.castling_rights().to_fen_field(), "Qkq");
}

#[test]
fn test_capturing_home_rook_clears_its_right() {
    let mut state = from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut state, &["a1a8"]);
    assert_eq!(state.castling_rights().to_fen_field(), "Kk");
    assert!(state.is_check());
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut state = from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    state.apply_move(sq("a7"), sq("a8"), None).unwrap();

    let piece = state.board().piece_at(sq("a8")).unwrap();
    assert_eq!((piece.kind, piece.color), (PieceKind::Queen, Color::White));
    assert_eq!(state.last_move().unwrap().promotion, Some(PieceKind::Queen));
}

#[test]
fn test_promotion_choice_and_invalid_choice() {
    let base = from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");

    let mut knight = base.clone();
    knight
        .apply_move(sq("a7"), sq("a8"), Some(PieceKind::Knight))
        .unwrap();
    assert_eq!(knight.board().piece_at(sq("a8")).map(|p| p.kind), Some(PieceKind::Knight));

    let mut invalid = base;
    invalid
        .apply_move(sq("a7"), sq("a8"), Some(PieceKind::King))
        .unwrap();
    assert_eq!(invalid.board().piece_at(sq("a8")).map(|p| p.kind), Some(PieceKind::Queen));
}

#[test]
fn test_stalemate() {
    let mut state = from_fen("7k/8/6K1/8/8/8/5Q2/8 w - - 0 1");
    play(&mut state, &["f2f7"]);

    assert!(state.is_stalemate());
    assert!(!state.is_checkmate());
    assert!(!state.is_check());
    assert!(state.is_game_over());
    assert!(state.all_legal_moves().is_empty());
}

#[test]
fn test_back_rank_mate() {
    let mut state = from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    play(&mut state, &["a1a8"]);
    assert!(state.is_checkmate());
    assert_eq!(state.current_player(), Color::Black);
}

#[test]
fn test_pinned_piece_cannot_move() {
    let state = from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(state.legal_moves(sq("e2")).is_empty());
    assert!(!state.legal_moves(sq("e1")).is_empty());
}

#[test]
fn test_king_cannot_take_defended_piece() {
    // the knight on c3 defends the bishop on e2
    let state = from_fen("4k3/8/8/8/8/2n5/4b3/4K3 w - - 0 1");
    let dests: Vec<_> = state.legal_moves(sq("e1")).iter().map(|d| d.to).collect();
    assert!(!dests.contains(&sq("e2")));
    assert!(dests.contains(&sq("d2")));
}

#[test]
fn test_wrong_side_and_off_board_queries() {
    let state = GameState::new();
    assert!(state.legal_moves(sq("e7")).is_empty());
    assert!(state.legal_moves(sq("e4")).is_empty());
    assert!(state.legal_moves_at(8, 0).is_empty());
    assert!(state.legal_moves_at(0, 99).is_empty());
    assert!(state.piece_at(9, 9).is_none());
    assert_eq!(state.legal_moves_at(6, 4).len(), 2);

    let off_board = Square(8, 0);
    assert!(state.legal_moves(off_board).is_empty());
    assert!(state.legal_moves(Square(0, usize::MAX)).is_empty());
    assert!(state.board().piece_at(off_board).is_none());
    assert!(!state.board().is_square_attacked(off_board, Color::White));
    assert!(!state.board().is_square_attacked(Square(usize::MAX, 3), Color::Black));
}

#[test]
fn test_off_board_moves_are_rejected() {
    let mut state = GameState::new();
    let fen = state.export_position();
    assert_eq!(
        state.apply_move(Square(8, 0), sq("a3"), None),
        Err(MoveError::EmptySquare { square: Square(8, 0) })
    );
    assert_eq!(
        state.apply_move(sq("e2"), Square(9, 4), None),
        Err(MoveError::IllegalDestination {
            from: sq("e2"),
            to: Square(9, 4),
        })
    );
    assert_eq!(state.export_position(), fen);
    assert!(state.move_history().is_empty());
}
