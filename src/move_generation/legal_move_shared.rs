//! Offset tables and edge-wrap guards shared by attack detection and move
//! generation.
//!
//! The board is a flat `0..64` array, so `square + offset` can land on a
//! different rank after running off the left or right edge. Every step is
//! therefore checked twice: index range, then file distance.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::moves::chess_move::Move;

pub const KNIGHT_OFFSETS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub const KING_OFFSETS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const BISHOP_DIRECTIONS: [i16; 4] = [-9, -7, 7, 9];
pub const ROOK_DIRECTIONS: [i16; 4] = [-8, -1, 1, 8];
pub const QUEEN_DIRECTIONS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Jump target for knight/king offsets, rejecting edge wraparound by file
/// distance (`max_file_distance` is 2 for knights, 1 for kings).
#[inline]
pub fn jump_target(square: Square, offset: i16, max_file_distance: u8) -> Option<Square> {
    let target = square as i16 + offset;
    if !is_valid_square(target) {
        return None;
    }
    let target = target as Square;
    if file_of(square).abs_diff(file_of(target)) > max_file_distance {
        return None;
    }
    Some(target)
}

/// One step of a sliding ray. `None` once the ray leaves the board or wraps.
#[inline]
pub fn slide_step(current: Square, direction: i16) -> Option<Square> {
    let next = current as i16 + direction;
    if !is_valid_square(next) {
        return None;
    }
    let next = next as Square;
    let previous_file = file_of(current) as i16;
    let next_file = file_of(next) as i16;
    let consistent = match direction {
        -1 | 1 => next_file == previous_file + direction,
        -8 | 8 => next_file == previous_file,
        _ => (next_file - previous_file).abs() == 1,
    };
    consistent.then_some(next)
}

/// Walks every ray in `directions`, pushing quiet moves and the first enemy
/// capture; the first own piece stops the ray without a move.
pub fn generate_sliding_moves(
    board: &BoardState,
    from: Square,
    directions: &[i16],
    out: &mut Vec<Move>,
) {
    let Some(color) = board.at(from).color() else {
        return;
    };

    for &direction in directions {
        let mut current = from;
        while let Some(next) = slide_step(current, direction) {
            let target = board.at(next);
            if target.is_empty() {
                out.push(Move::new(from, next));
            } else {
                if !target.is_color(color) {
                    out.push(Move::new(from, next));
                }
                break;
            }
            current = next;
        }
    }
}

/// Pushes jump moves (knight/king) onto empty or enemy-occupied targets.
pub fn generate_jump_moves(
    board: &BoardState,
    from: Square,
    offsets: &[i16],
    max_file_distance: u8,
    out: &mut Vec<Move>,
) {
    let Some(color) = board.at(from).color() else {
        return;
    };

    for &offset in offsets {
        let Some(to) = jump_target(from, offset, max_file_distance) else {
            continue;
        };
        if !board.at(to).is_color(color) {
            out.push(Move::new(from, to));
        }
    }
}
