//! Terminal-oriented Unicode board renderer.

use crate::game_state::{chess_types::*, game_state::BoardState};

/// Render the board to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(board.at(make_square(file, rank))));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::None => '·',
        Piece::LightPawn => '♙',
        Piece::LightKnight => '♘',
        Piece::LightBishop => '♗',
        Piece::LightRook => '♖',
        Piece::LightQueen => '♕',
        Piece::LightKing => '♔',
        Piece::DarkPawn => '♟',
        Piece::DarkKnight => '♞',
        Piece::DarkBishop => '♝',
        Piece::DarkRook => '♜',
        Piece::DarkQueen => '♛',
        Piece::DarkKing => '♚',
    }
}
