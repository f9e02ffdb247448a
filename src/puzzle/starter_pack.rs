//! Built-in handcrafted starter puzzles.

use crate::codec::pack_builder::PuzzleEntry;

const STARTER: [(&str, &[&str], i32, &str, &str); 10] = [
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &["e2e4", "e7e5", "g1f3"],
        700,
        "opening development",
        "King_Pawn_Game",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &["d2d4", "d7d5", "c2c4"],
        750,
        "opening gambit",
        "Queens_Gambit",
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/8/PPPP1PPP/RNBQK1NR w KQkq - 2 3",
        &["d1h5", "g8f6", "h5f7"],
        900,
        "mate attack",
        "Italian_Game",
    ),
    (
        "6k1/5ppp/8/8/8/6Q1/6PP/6K1 w - - 0 1",
        &["g3b8"],
        820,
        "skewer queenmove",
        "Miniature",
    ),
    (
        "7k/P7/8/8/8/8/8/K7 w - - 0 1",
        &["a7a8q"],
        880,
        "promotion",
        "Pawn_Ending",
    ),
    (
        "6k1/7P/8/8/8/8/8/K7 w - - 0 1",
        &["h7h8n"],
        980,
        "underpromotion knight",
        "Pawn_Ending",
    ),
    (
        "4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1",
        &["d5e6"],
        860,
        "en_passant",
        "Special_Rule",
    ),
    (
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        &["e1g1", "e8c8"],
        830,
        "castling",
        "Castling_Example",
    ),
    (
        "6k1/5ppp/8/8/8/8/5PPP/5RK1 w - - 0 1",
        &["f1e1"],
        780,
        "rook_move prophylaxis",
        "Rook_Ending",
    ),
    (
        "5rk1/5ppp/8/8/8/8/5PPP/5RK1 b - - 0 1",
        &["f8e8"],
        790,
        "rook_move defense",
        "Rook_Ending",
    ),
];

pub fn starter_entries() -> Vec<PuzzleEntry> {
    STARTER
        .iter()
        .map(|(fen, moves, rating, themes, opening)| PuzzleEntry {
            fen: (*fen).to_owned(),
            moves_uci: moves.iter().map(|mv| (*mv).to_owned()).collect(),
            rating: *rating,
            themes_raw: (*themes).to_owned(),
            opening_raw: (*opening).to_owned(),
        })
        .collect()
}
