use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(board: &BoardState, from: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(board, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn h_file_rook_does_not_wrap_to_next_rank() {
        let board = parse_fen("4k3/8/8/8/7R/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, 31, &mut out);
        // 7 along the rank, 7 along the file.
        assert_eq!(out.len(), 14);
        assert!(!out.contains(&Move::new(31, 32)));
    }
}
