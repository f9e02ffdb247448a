use crate::game_state::chess_rules::{castling_lanes, CastlingLane};
use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{generate_jump_moves, KING_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(board: &BoardState, from: Square, out: &mut Vec<Move>) {
    let Some(side) = board.at(from).color() else {
        return;
    };

    generate_jump_moves(board, from, &KING_OFFSETS, 1, out);
    generate_castling_moves(board, side, from, out);
}

fn generate_castling_moves(board: &BoardState, side: Color, king_from: Square, out: &mut Vec<Move>) {
    for lane in castling_lanes(side) {
        if can_castle(board, side, king_from, &lane) {
            out.push(Move::new(lane.king_from, lane.king_to));
        }
    }
}

fn can_castle(board: &BoardState, side: Color, king_from: Square, lane: &CastlingLane) -> bool {
    if king_from != lane.king_from || (board.castling_rights & lane.right) == 0 {
        return false;
    }
    if board.at(lane.rook_from) != Piece::new(side, PieceKind::Rook) {
        return false;
    }
    if lane.between.iter().any(|&square| !board.at(square).is_empty()) {
        return false;
    }

    // Start, transit and landing squares; b1/b8 only has to be empty.
    let enemy = side.opposite();
    lane.king_path
        .iter()
        .all(|&square| !is_square_attacked(board, square, enemy))
}
