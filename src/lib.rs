//! Crate root module declarations for the CPZ chess puzzle core.
//!
//! Exposes the rules engine (board state, attack detection, legal move
//! generation, move application), the CPZ1 binary codec, and the puzzle
//! session layer so the `cpz` binary, tests and benches share stable paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod codec {
    pub mod lichess_csv;
    pub mod pack;
    pub mod pack_builder;
    pub mod pack_header;
    pub mod packed_board;
    pub mod puzzle_record;
}

pub mod puzzle {
    pub mod puzzle_session;
    pub mod starter_pack;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
