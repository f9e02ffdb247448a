//! Long algebraic (UCI) move text: `e2e4`, `a7a8q`.
//!
//! Text carries no board context, so a parsed move is only structurally valid;
//! legality is checked against a position separately.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Promotion;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    for square in [mv.from, mv.to] {
        match square_to_algebraic(square) {
            Ok(text) => out.push_str(&text),
            Err(_) => out.push_str("??"),
        }
    }
    if let Some(ch) = promotion_to_char(mv.promotion) {
        out.push(ch);
    }
    out
}

pub fn long_algebraic_to_move(text: &str) -> ChessResult<Move> {
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => Promotion::None,
        Some(ch) => char_to_promotion(ch).ok_or_else(invalid)?,
    };

    Ok(Move::with_promotion(from, to, promotion))
}

/// Parses a whitespace-separated UCI move list.
pub fn parse_move_list(text: &str) -> ChessResult<Vec<Move>> {
    text.split_whitespace().map(long_algebraic_to_move).collect()
}

fn promotion_to_char(promotion: Promotion) -> Option<char> {
    match promotion {
        Promotion::None => None,
        Promotion::Knight => Some('n'),
        Promotion::Bishop => Some('b'),
        Promotion::Rook => Some('r'),
        Promotion::Queen => Some('q'),
        Promotion::Invalid => Some('?'),
    }
}

fn char_to_promotion(ch: char) -> Option<Promotion> {
    match ch.to_ascii_lowercase() {
        'n' => Some(Promotion::Knight),
        'b' => Some(Promotion::Bishop),
        'r' => Some(Promotion::Rook),
        'q' => Some(Promotion::Queen),
        _ => None,
    }
}
