//! Pseudo-legal pawn moves: pushes, double pushes, captures, en passant and
//! promotions.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(board: &BoardState, from: Square, out: &mut Vec<Move>) {
    let Some(side) = board.at(from).color() else {
        return;
    };
    let file = file_of(from);
    let rank = rank_of(from);

    let (direction, start_rank, promotion_rank): (i16, u8, u8) = match side {
        Color::Light => (8, 1, 7),
        Color::Dark => (-8, 6, 0),
    };

    let forward = from as i16 + direction;
    if is_valid_square(forward) && board.at(forward as Square).is_empty() {
        let to = forward as Square;
        push_pawn_move(from, to, promotion_rank, out);

        if rank == start_rank && rank_of(to) != promotion_rank {
            let double = (forward + direction) as Square;
            if board.at(double).is_empty() {
                out.push(Move::new(from, double));
            }
        }
    }

    // captures and en-passant
    for (file_delta, allowed) in [(-1i16, file > 0), (1i16, file < 7)] {
        if !allowed {
            continue;
        }
        let target = from as i16 + direction + file_delta;
        if !is_valid_square(target) {
            continue;
        }
        let to = target as Square;
        let occupant = board.at(to);
        let is_capture = occupant.color().is_some_and(|color| color != side);
        if is_capture || board.en_passant_square == Some(to) {
            push_pawn_move(from, to, promotion_rank, out);
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promotion_rank: u8, out: &mut Vec<Move>) {
    if rank_of(to) == promotion_rank {
        for promotion in Promotion::CHOICES {
            out.push(Move::with_promotion(from, to, promotion));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
