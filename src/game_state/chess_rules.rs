//! Canonical chess-rule constants.
//!
//! Starting position FEN, castling king/rook squares, and the fixed sizes of
//! the CPZ1 pack format.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const LIGHT_KING_HOME: Square = 4;
pub const DARK_KING_HOME: Square = 60;

/// One castling option: the right it needs and the squares it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty.
    pub between: &'static [Square],
    /// Squares the king stands on, crosses, or lands on.
    pub king_path: [Square; 3],
}

pub const LIGHT_KINGSIDE: CastlingLane = CastlingLane {
    right: CASTLE_LIGHT_KINGSIDE,
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    between: &[5, 6],
    king_path: [4, 5, 6],
};

pub const LIGHT_QUEENSIDE: CastlingLane = CastlingLane {
    right: CASTLE_LIGHT_QUEENSIDE,
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    between: &[3, 2, 1],
    king_path: [4, 3, 2],
};

pub const DARK_KINGSIDE: CastlingLane = CastlingLane {
    right: CASTLE_DARK_KINGSIDE,
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    between: &[61, 62],
    king_path: [60, 61, 62],
};

pub const DARK_QUEENSIDE: CastlingLane = CastlingLane {
    right: CASTLE_DARK_QUEENSIDE,
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    between: &[59, 58, 57],
    king_path: [60, 59, 58],
};

#[inline]
pub const fn castling_lanes(color: Color) -> [CastlingLane; 2] {
    match color {
        Color::Light => [LIGHT_KINGSIDE, LIGHT_QUEENSIDE],
        Color::Dark => [DARK_KINGSIDE, DARK_QUEENSIDE],
    }
}

#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}

/// Castling right tied to a rook home square, if any.
#[inline]
pub const fn rook_home_right(square: Square) -> Option<CastlingRights> {
    match square {
        0 => Some(CASTLE_LIGHT_QUEENSIDE),
        7 => Some(CASTLE_LIGHT_KINGSIDE),
        56 => Some(CASTLE_DARK_QUEENSIDE),
        63 => Some(CASTLE_DARK_KINGSIDE),
        _ => None,
    }
}

pub const MAX_SOLUTION_MOVES: usize = 24;
pub const PACKED_BOARD_SIZE: usize = 33;
pub const PACK_HEADER_SIZE: usize = 18;
pub const PACK_MAGIC: [u8; 4] = *b"CPZ1";
/// Minimum (core) puzzle record size.
pub const RECORD_SIZE: usize = 96;
/// Record size carrying the themes/opening text fields.
pub const EXTENDED_RECORD_SIZE: usize = 128;
