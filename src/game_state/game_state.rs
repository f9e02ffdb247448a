//! Core board state representation.
//!
//! `BoardState` is a plain 64-square value. Every move application produces a
//! fresh copy, so move generation can simulate candidates on scratch copies
//! without touching the caller's board.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_legal_moves_from, is_checkmate, is_legal_move, is_stalemate,
};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    /// Indexed by square, a1 = 0 and h8 = 63.
    pub board: [Piece; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Tracked for the fifty-move rule but never enforced here.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            board: [Piece::None; 64],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> ChessResult<Self> {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn at(&self, square: Square) -> Piece {
        self.board[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.board[square as usize] = piece;
    }

    /// Linear scan for the king of `color`; `None` when the board has none.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.board
            .iter()
            .position(|piece| *piece == king)
            .map(|square| square as Square)
    }

    #[inline]
    pub fn is_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self, square, by_color)
    }

    /// True when the side to move has a king and it is attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    #[inline]
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    #[inline]
    pub fn generate_legal_moves_from(&self, square: Square) -> Vec<Move> {
        generate_legal_moves_from(self, square)
    }

    #[inline]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        is_legal_move(self, mv)
    }

    /// Returns the position after `mv`. No legality check is made.
    #[inline]
    pub fn apply_move(&self, mv: Move) -> BoardState {
        apply_move(self, mv)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        is_checkmate(self)
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        is_stalemate(self)
    }
}
