//! Perft: exhaustive legal-move tree counts with leaf statistics.
//!
//! Reference counts for the standard test positions pin move generation,
//! including castling, en passant, promotion and the edge-wrap guards.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{generate_legal_moves, is_checkmate};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(board) {
        let next = apply_move(board, mv);
        if depth == 1 {
            count_leaf(board, mv, &next, &mut total);
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }
    total
}

/// Node count per root move, sorted the way the moves were generated.
pub fn perft_divide(board: &BoardState, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_legal_moves(board)
        .into_iter()
        .map(|mv| (mv, perft(&apply_move(board, mv), depth - 1).nodes))
        .collect()
}

fn count_leaf(before: &BoardState, mv: Move, after: &BoardState, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let moved = before.at(mv.from);
    let is_en_passant = moved.kind() == Some(PieceKind::Pawn)
        && before.en_passant_square == Some(mv.to)
        && before.at(mv.to).is_empty();

    if !before.at(mv.to).is_empty() || is_en_passant {
        counts.captures += 1;
    }
    if is_en_passant {
        counts.en_passant += 1;
    }
    if moved.kind() == Some(PieceKind::King) && mv.from.abs_diff(mv.to) == 2 {
        counts.castles += 1;
    }
    if mv.promotion.piece_kind().is_some() {
        counts.promotions += 1;
    }
    if after.in_check() {
        counts.checks += 1;
        if is_checkmate(after) {
            counts.checkmates += 1;
        }
    }
}
