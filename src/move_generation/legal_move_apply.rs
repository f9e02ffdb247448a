//! Pure move application: `&BoardState` in, new `BoardState` out.
//!
//! No legality check is made here. Callers filter through the legal move
//! generator first; an illegal move is transformed mechanically.

use crate::game_state::chess_rules::{castling_lanes, castling_rights_of, rook_home_right};
use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::moves::chess_move::Move;

pub fn apply_move(board: &BoardState, mv: Move) -> BoardState {
    let from = mv.from;
    let to = mv.to;
    let moving_color = board.side_to_move;
    let moved_piece = board.at(from);
    let captured = board.at(to);
    let is_pawn = moved_piece.kind() == Some(PieceKind::Pawn);

    let mut next = *board;

    next.set(to, moved_piece);
    next.set(from, Piece::None);

    if let Some(kind) = mv.promotion.piece_kind() {
        next.set(to, Piece::new(moving_color, kind));
    }

    if is_pawn && board.en_passant_square == Some(to) {
        let capture_square = match moving_color {
            Color::Light => to.checked_sub(8),
            Color::Dark => Some(to + 8).filter(|square| *square < 64),
        };
        if let Some(square) = capture_square {
            next.set(square, Piece::None);
        }
    }

    if moved_piece.kind() == Some(PieceKind::King) {
        if let Some(king_color) = moved_piece.color() {
            castle_rook(&mut next, king_color, from, to);
            next.castling_rights &= !castling_rights_of(king_color);
        }
    }

    // A rook leaving home, or anything landing on a rook home square, kills
    // that right.
    if moved_piece.kind() == Some(PieceKind::Rook) {
        if let Some(right) = rook_home_right(from) {
            next.castling_rights &= !right;
        }
    }
    if let Some(right) = rook_home_right(to) {
        next.castling_rights &= !right;
    }

    next.en_passant_square = if is_pawn && from.abs_diff(to) == 16 {
        Some((from + to) / 2)
    } else {
        None
    };

    next.side_to_move = moving_color.opposite();

    if is_pawn || !captured.is_empty() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next
}

fn castle_rook(board: &mut BoardState, color: Color, king_from: Square, king_to: Square) {
    let Some(lane) = castling_lanes(color)
        .into_iter()
        .find(|lane| lane.king_from == king_from && lane.king_to == king_to)
    else {
        return;
    };
    let rook = board.at(lane.rook_from);
    board.set(lane.rook_from, Piece::None);
    board.set(lane.rook_to, rook);
}
