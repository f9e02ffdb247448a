use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(board: &BoardState, from: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(board, from, &BISHOP_DIRECTIONS, out);
}
