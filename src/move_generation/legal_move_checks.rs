use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_shared::{
    jump_target, slide_step, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

#[inline]
pub fn king_square(board: &BoardState, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &BoardState, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &BoardState, square: Square, attacker_color: Color) -> bool {
    is_attacked_by_pawn(board, square, attacker_color)
        || is_attacked_by_jumper(
            board,
            square,
            Piece::new(attacker_color, PieceKind::Knight),
            &KNIGHT_OFFSETS,
            2,
        )
        || is_attacked_by_jumper(
            board,
            square,
            Piece::new(attacker_color, PieceKind::King),
            &KING_OFFSETS,
            1,
        )
        || is_attacked_by_slider(
            board,
            square,
            &BISHOP_DIRECTIONS,
            Piece::new(attacker_color, PieceKind::Bishop),
            Piece::new(attacker_color, PieceKind::Queen),
        )
        || is_attacked_by_slider(
            board,
            square,
            &ROOK_DIRECTIONS,
            Piece::new(attacker_color, PieceKind::Rook),
            Piece::new(attacker_color, PieceKind::Queen),
        )
}

// An attacking pawn sits one rank behind `square` from its own point of view.
fn is_attacked_by_pawn(board: &BoardState, square: Square, attacker_color: Color) -> bool {
    let pawn = Piece::new(attacker_color, PieceKind::Pawn);
    let file = file_of(square);
    let pawn_rank = match attacker_color {
        Color::Light => rank_of(square).checked_sub(1),
        Color::Dark => Some(rank_of(square) + 1).filter(|rank| *rank < 8),
    };
    let Some(pawn_rank) = pawn_rank else {
        return false;
    };

    (file > 0 && board.at(make_square(file - 1, pawn_rank)) == pawn)
        || (file < 7 && board.at(make_square(file + 1, pawn_rank)) == pawn)
}

fn is_attacked_by_jumper(
    board: &BoardState,
    square: Square,
    attacker: Piece,
    offsets: &[i16],
    max_file_distance: u8,
) -> bool {
    offsets
        .iter()
        .filter_map(|&offset| jump_target(square, offset, max_file_distance))
        .any(|target| board.at(target) == attacker)
}

fn is_attacked_by_slider(
    board: &BoardState,
    square: Square,
    directions: &[i16],
    slider: Piece,
    queen: Piece,
) -> bool {
    for &direction in directions {
        let mut current = square;
        while let Some(next) = slide_step(current, direction) {
            let piece = board.at(next);
            if piece == slider || piece == queen {
                return true;
            }
            if !piece.is_empty() {
                break;
            }
            current = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn pawn_attacks_point_forward_only() {
        let board = parse_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // e4 pawn hits d5 and f5.
        assert!(is_square_attacked(&board, 35, Color::Light));
        assert!(is_square_attacked(&board, 37, Color::Light));
        assert!(!is_square_attacked(&board, 36, Color::Light));
        assert!(!is_square_attacked(&board, 19, Color::Light));
    }

    #[test]
    fn edge_pawn_does_not_wrap_onto_other_side() {
        // h4 pawn must not attack a6 (h4 + 9 wraps there on a flat board).
        let board = parse_fen("4k3/8/8/8/7P/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&board, 38, Color::Light));
        assert!(!is_square_attacked(&board, 32, Color::Light));
        assert!(!is_square_attacked(&board, 40, Color::Light));
    }

    #[test]
    fn king_attacks_only_adjacent_squares() {
        let board = parse_fen("8/8/8/8/8/8/8/K6k w - - 0 1").expect("FEN should parse");
        // a1 king: a2, b1, b2; h1 + 1 would wrap onto a2 for the dark king.
        assert!(is_square_attacked(&board, 8, Color::Light));
        assert!(is_square_attacked(&board, 1, Color::Light));
        assert!(is_square_attacked(&board, 9, Color::Light));
        assert!(!is_square_attacked(&board, 2, Color::Light));
        assert!(is_square_attacked(&board, 14, Color::Dark));
        assert!(!is_square_attacked(&board, 8, Color::Dark));
        assert!(!is_square_attacked(&board, 0, Color::Dark));
    }

    #[test]
    fn knights_on_edge_files_do_not_wrap() {
        // a4 knight and h5 knight.
        let board = parse_fen("4k3/8/8/7n/N7/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&board, 41, Color::Light));
        assert!(is_square_attacked(&board, 18, Color::Light));
        // a4 - 10 and a4 + 6 land on g2 and g4 without the file guard.
        assert!(!is_square_attacked(&board, 14, Color::Light));
        assert!(!is_square_attacked(&board, 30, Color::Light));

        assert!(is_square_attacked(&board, 29, Color::Dark));
        assert!(is_square_attacked(&board, 54, Color::Dark));
        // h5 + 10 and h5 - 6 land on b7 and b5.
        assert!(!is_square_attacked(&board, 49, Color::Dark));
        assert!(!is_square_attacked(&board, 33, Color::Dark));
    }

    #[test]
    fn sliders_are_blocked_by_first_piece() {
        let board = parse_fen("4k3/8/8/8/R2p3K/8/8/8 w - - 0 1").expect("FEN should parse");
        // a4 rook: sees d4 (black pawn) but not beyond.
        assert!(is_square_attacked(&board, 27, Color::Light));
        assert!(!is_square_attacked(&board, 28, Color::Light));
    }

    #[test]
    fn queen_attacks_diagonally_and_orthogonally() {
        let board = parse_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&board, 8, Color::Dark));
        assert!(!is_square_attacked(&board, 0, Color::Dark));
        assert!(is_square_attacked(&board, 3, Color::Dark));
        assert!(is_square_attacked(&board, 39, Color::Dark));
        assert!(!is_square_attacked(&board, 4, Color::Dark));
    }

    #[test]
    fn check_detection_and_missing_king() {
        let board = parse_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&board, Color::Dark));
        assert!(!is_king_in_check(&board, Color::Light));

        let kingless = parse_fen("8/8/8/8/8/8/8/4R3 b - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&kingless, Color::Dark));
    }
}
