//! Full legal move generation pipeline.
//!
//! Per-piece pseudo-legal generation, then each candidate is applied to a
//! scratch copy and kept only if the mover's king survives unattacked.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// Carries the side that delivered mate.
    Checkmate(Color),
    Stalemate,
}

/// Pseudo-legal moves of the piece on `square`. Empty when the square is
/// empty or holds a piece of the side not to move.
pub fn generate_pseudo_legal_moves_from(board: &BoardState, square: Square, out: &mut Vec<Move>) {
    let piece = board.at(square);
    if !piece.is_color(board.side_to_move) {
        return;
    }
    match piece.kind() {
        Some(PieceKind::Pawn) => generate_pawn_moves(board, square, out),
        Some(PieceKind::Knight) => generate_knight_moves(board, square, out),
        Some(PieceKind::Bishop) => generate_bishop_moves(board, square, out),
        Some(PieceKind::Rook) => generate_rook_moves(board, square, out),
        Some(PieceKind::Queen) => generate_queen_moves(board, square, out),
        Some(PieceKind::King) => generate_king_moves(board, square, out),
        None => {}
    }
}

pub fn generate_pseudo_legal_moves(board: &BoardState) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for square in 0..64 {
        generate_pseudo_legal_moves_from(board, square, &mut pseudo);
    }
    pseudo
}

pub fn generate_legal_moves(board: &BoardState) -> Vec<Move> {
    retain_legal(board, generate_pseudo_legal_moves(board))
}

pub fn generate_legal_moves_from(board: &BoardState, square: Square) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(28);
    generate_pseudo_legal_moves_from(board, square, &mut pseudo);
    retain_legal(board, pseudo)
}

/// Membership test against the generated list, so it never disagrees with
/// generation.
pub fn is_legal_move(board: &BoardState, mv: Move) -> bool {
    generate_legal_moves_from(board, mv.from).contains(&mv)
}

pub fn is_checkmate(board: &BoardState) -> bool {
    is_king_in_check(board, board.side_to_move) && generate_legal_moves(board).is_empty()
}

pub fn is_stalemate(board: &BoardState) -> bool {
    !is_king_in_check(board, board.side_to_move) && generate_legal_moves(board).is_empty()
}

pub fn game_status(board: &BoardState) -> GameStatus {
    if !generate_legal_moves(board).is_empty() {
        return GameStatus::Ongoing;
    }
    if is_king_in_check(board, board.side_to_move) {
        GameStatus::Checkmate(board.side_to_move.opposite())
    } else {
        GameStatus::Stalemate
    }
}

// A move survives only if the mover still has a king afterwards and it is not
// attacked; a board without the mover's king therefore has no legal moves.
fn retain_legal(board: &BoardState, mut moves: Vec<Move>) -> Vec<Move> {
    let side = board.side_to_move;
    moves.retain(|&mv| {
        let next = apply_move(board, mv);
        match next.find_king(side) {
            Some(king) => !is_square_attacked(&next, king, side.opposite()),
            None => false,
        }
    });
    moves
}
