use super::types::{CastlingRights, Color, MoveRecord, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces. Row 0 is Black's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting placement, nothing moved
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(*kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    /// The piece on `sq`; a square off the board is empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells.get(sq.0).and_then(|r| r.get(sq.1)).copied().flatten()
    }

    /// Raw lookup by coordinates; anything off the board is empty
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.piece_at(Square(row, col))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> Option<&mut Option<Piece>> {
        self.cells.get_mut(sq.0).and_then(|r| r.get_mut(sq.1))
    }

    /// Writes off the board are ignored
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(cell) = self.cell_mut(sq) {
            *cell = piece;
        }
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).and_then(Option::take)
    }

    /// Every occupied square with its piece, in board-scan order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/// Complete game state: the rules engine.
///
/// Mutated only through `apply_move` and `undo_last_move`; `check`,
/// `checkmate` and `stalemate` are recomputed after each of them.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_history: Vec<MoveRecord>,
    /// Indexed by the color of the captured piece, in capture order
    pub(crate) captured_pieces: [Vec<Piece>; 2],
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            current_player: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            halfmove_clock: 0,
            fullmove_number: 1,
            check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Reset to the standard starting position
    pub fn initialize(&mut self) {
        *self = GameState::new();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece on a raw (row, col); off-board coordinates read as empty
    #[must_use]
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.board.get(row, col)
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    /// Pieces of `color` that have been captured, oldest first
    #[must_use]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured_pieces[color.index()]
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Whether the side to move is in check
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
