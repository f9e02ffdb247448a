use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_shared::{generate_jump_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(board: &BoardState, from: Square, out: &mut Vec<Move>) {
    generate_jump_moves(board, from, &KNIGHT_OFFSETS, 2, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn corner_knight_has_two_targets() {
        let board = parse_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&board, 0, &mut out);
        assert_eq!(out, vec![Move::new(0, 10), Move::new(0, 17)]);
    }

    #[test]
    fn knight_skips_own_pieces_and_captures_enemies() {
        let board = parse_fen("4k3/8/8/8/8/1p6/2P5/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&board, 0, &mut out);
        assert_eq!(out, vec![Move::new(0, 17)]);
    }
}
