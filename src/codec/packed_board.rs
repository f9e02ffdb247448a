//! 33-byte packed board: one flags byte followed by 32 nibble bytes.
//!
//! Flags: bit 0 Light to move, bits 1..5 castling mask, bits 5..8 en-passant
//! file (7 = none). The en-passant rank follows from the side to move: rank 6
//! when Light is to move, rank 3 when Dark is. Square `2i` sits in the low
//! nibble of byte `1 + i`, square `2i + 1` in the high nibble.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::PACKED_BOARD_SIZE;
use crate::game_state::{chess_types::*, game_state::BoardState};

const SIDE_TO_MOVE_BIT: u8 = 0x01;
const CASTLING_SHIFT: u8 = 1;
const EN_PASSANT_SHIFT: u8 = 5;
const NO_EN_PASSANT_FILE: u8 = 7;

pub fn decode_packed_board(data: &[u8]) -> ChessResult<BoardState> {
    if data.len() < PACKED_BOARD_SIZE {
        return Err(ChessError::BufferTooShort {
            what: "packed board",
            expected: PACKED_BOARD_SIZE,
            actual: data.len(),
        });
    }

    let mut board = BoardState::new_empty();
    apply_flags(&mut board, data[0]);

    for (index, &byte) in data[1..PACKED_BOARD_SIZE].iter().enumerate() {
        let even = (index * 2) as Square;
        board.set(even, piece_from_nibble(even, byte & 0x0F)?);
        board.set(even + 1, piece_from_nibble(even + 1, byte >> 4)?);
    }

    Ok(board)
}

pub fn encode_packed_board(board: &BoardState) -> [u8; PACKED_BOARD_SIZE] {
    let mut out = [0u8; PACKED_BOARD_SIZE];
    out[0] = encode_flags(board);
    for (index, byte) in out[1..].iter_mut().enumerate() {
        let even = index * 2;
        *byte = board.board[even].code() | (board.board[even + 1].code() << 4);
    }
    out
}

fn apply_flags(board: &mut BoardState, flags: u8) {
    board.side_to_move = if flags & SIDE_TO_MOVE_BIT != 0 {
        Color::Light
    } else {
        Color::Dark
    };
    board.castling_rights = (flags >> CASTLING_SHIFT) & CASTLE_ALL;

    let file = (flags >> EN_PASSANT_SHIFT) & 0x07;
    board.en_passant_square = (file != NO_EN_PASSANT_FILE)
        .then(|| make_square(file, en_passant_rank(board.side_to_move)));
}

pub(crate) fn encode_flags(board: &BoardState) -> u8 {
    let mut flags = 0u8;
    if board.side_to_move == Color::Light {
        flags |= SIDE_TO_MOVE_BIT;
    }
    flags |= (board.castling_rights & CASTLE_ALL) << CASTLING_SHIFT;
    flags |= encodable_en_passant_file(board) << EN_PASSANT_SHIFT;
    flags
}

/// File written for the en-passant target, or 7 when it cannot or need not be
/// stored: no target, wrong rank for the side to move, the h-file (7 already
/// means none), or no legal capture onto it.
fn encodable_en_passant_file(board: &BoardState) -> u8 {
    let Some(target) = board.en_passant_square else {
        return NO_EN_PASSANT_FILE;
    };
    let file = file_of(target);
    if file >= NO_EN_PASSANT_FILE || rank_of(target) != en_passant_rank(board.side_to_move) {
        return NO_EN_PASSANT_FILE;
    }

    let capturable = board.generate_legal_moves().iter().any(|mv| {
        mv.to == target && board.at(mv.from).kind() == Some(PieceKind::Pawn)
    });
    if capturable {
        file
    } else {
        NO_EN_PASSANT_FILE
    }
}

#[inline]
const fn en_passant_rank(side_to_move: Color) -> u8 {
    match side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    }
}

fn piece_from_nibble(square: Square, value: u8) -> ChessResult<Piece> {
    Piece::from_code(value).ok_or(ChessError::InvalidPieceNibble { square, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    fn board(fen: &str) -> BoardState {
        parse_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn starting_position_bytes() {
        let packed = encode_packed_board(&board(STARTING_POSITION_FEN));
        // Light to move, all four rights, no en passant.
        assert_eq!(packed[0], 0x01 | (0x0F << 1) | (7 << 5));
        // a1 rook (4) low, b1 knight (2) high.
        assert_eq!(packed[1], 0x24);
        // a2/b2 light pawns.
        assert_eq!(packed[5], 0x11);
        // a8 rook (10), b8 knight (8).
        assert_eq!(packed[29], 0x8A);
        assert!(packed[9..25].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn decode_restores_placement_and_flags() {
        let original = board("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1");
        let decoded = decode_packed_board(&encode_packed_board(&original))
            .expect("encoded board should decode");
        assert_eq!(decoded.board, original.board);
        assert_eq!(decoded.side_to_move, Color::Dark);
        assert_eq!(decoded.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(decoded.en_passant_square, None);
        assert_eq!(decoded.halfmove_clock, 0);
        assert_eq!(decoded.fullmove_number, 1);
    }

    #[test]
    fn en_passant_rank_depends_on_side_to_move() {
        let mut data = [0u8; PACKED_BOARD_SIZE];
        data[0] = 0x01 | (4 << 5);
        let light = decode_packed_board(&data).expect("board should decode");
        assert_eq!(light.en_passant_square, Some(44)); // e6

        data[0] = 3 << 5;
        let dark = decode_packed_board(&data).expect("board should decode");
        assert_eq!(dark.en_passant_square, Some(19)); // d3
    }

    #[test]
    fn en_passant_is_kept_only_when_capturable() {
        let capturable = board("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1");
        assert_eq!(encode_packed_board(&capturable)[0] >> 5, 4);

        let idle = board("4k3/8/8/4p3/8/8/8/4K3 w - e6 0 1");
        assert_eq!(encode_packed_board(&idle)[0] >> 5, 7);

        let h_file = board("4k3/8/8/6Pp/8/8/8/4K3 w - h6 0 1");
        assert_eq!(encode_packed_board(&h_file)[0] >> 5, 7);
    }

    #[test]
    fn invalid_nibble_and_short_buffer_are_errors() {
        let mut data = [0u8; PACKED_BOARD_SIZE];
        data[0] = 7 << 5;
        data[3] = 0xD0;
        assert_eq!(
            decode_packed_board(&data),
            Err(ChessError::InvalidPieceNibble { square: 5, value: 13 })
        );

        assert_eq!(
            decode_packed_board(&data[..32]),
            Err(ChessError::BufferTooShort {
                what: "packed board",
                expected: 33,
                actual: 32
            })
        );
    }
}
