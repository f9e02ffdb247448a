//! Fixed-stride puzzle records.
//!
//! Core layout (96 bytes): rating u16 LE, board flags byte, move count,
//! 32 board bytes, then up to 24 packed moves as u16 LE. Records of 128 bytes
//! or more carry two NUL-terminated text fields: themes at 84 (32 bytes) and
//! opening at 116 (12 bytes). Move slots 24 onward would overlap the text
//! fields, so the move count is capped at 24.

use crate::codec::packed_board::{decode_packed_board, encode_packed_board};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    EXTENDED_RECORD_SIZE, MAX_SOLUTION_MOVES, PACKED_BOARD_SIZE, RECORD_SIZE,
};
use crate::game_state::{chess_types::Color, game_state::BoardState};
use crate::moves::chess_move::Move;
use crate::utils::long_algebraic::move_to_long_algebraic;

const RATING_OFFSET: usize = 0;
const FLAGS_OFFSET: usize = 2;
const MOVE_COUNT_OFFSET: usize = 3;
const BOARD_OFFSET: usize = 4;
const MOVES_OFFSET: usize = 36;
const THEMES_OFFSET: usize = 84;
const THEMES_LEN: usize = 32;
const OPENING_OFFSET: usize = 116;
const OPENING_LEN: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    pub rating: u16,
    pub position: BoardState,
    /// Player move, scripted reply, player move, ... consumed left to right.
    pub solution: Vec<Move>,
    /// Comma-separated theme tags.
    pub themes: String,
    pub opening: String,
}

impl Puzzle {
    /// The solver plays the side to move in the starting position.
    #[inline]
    pub fn player_color(&self) -> Color {
        self.position.side_to_move
    }

    pub fn theme_tags(&self) -> impl Iterator<Item = &str> {
        self.themes.split(',').filter(|tag| !tag.is_empty())
    }

    /// Replays the whole solution from the starting position; the first move
    /// that is not legal where it is played is reported.
    pub fn validate_solution(&self) -> ChessResult<()> {
        let mut board = self.position;
        for (ply, &mv) in self.solution.iter().enumerate() {
            if !board.is_legal_move(mv) {
                return Err(ChessError::IllegalSolutionMove {
                    ply,
                    text: move_to_long_algebraic(mv),
                });
            }
            board = board.apply_move(mv);
        }
        Ok(())
    }
}

pub fn decode_puzzle_record(data: &[u8]) -> ChessResult<Puzzle> {
    if data.len() < RECORD_SIZE {
        return Err(ChessError::BufferTooShort {
            what: "puzzle record",
            expected: RECORD_SIZE,
            actual: data.len(),
        });
    }

    let mut puzzle = decode_core_fields(data)?;
    if data.len() >= EXTENDED_RECORD_SIZE {
        puzzle.themes = read_text_field(&data[THEMES_OFFSET..THEMES_OFFSET + THEMES_LEN]);
        puzzle.opening = read_text_field(&data[OPENING_OFFSET..OPENING_OFFSET + OPENING_LEN]);
    }
    Ok(puzzle)
}

fn decode_core_fields(data: &[u8]) -> ChessResult<Puzzle> {
    let rating = u16::from_le_bytes([data[RATING_OFFSET], data[RATING_OFFSET + 1]]);

    let mut packed = [0u8; PACKED_BOARD_SIZE];
    packed[0] = data[FLAGS_OFFSET];
    packed[1..].copy_from_slice(&data[BOARD_OFFSET..BOARD_OFFSET + 32]);
    let position = decode_packed_board(&packed)?;

    let move_count = (data[MOVE_COUNT_OFFSET] as usize).min(MAX_SOLUTION_MOVES);
    let solution = data[MOVES_OFFSET..MOVES_OFFSET + move_count * 2]
        .chunks_exact(2)
        .map(|pair| Move::unpack(u16::from_le_bytes([pair[0], pair[1]])))
        .collect();

    Ok(Puzzle {
        rating,
        position,
        solution,
        themes: String::new(),
        opening: String::new(),
    })
}

/// Encodes an extended (128-byte) record. Text fields are whitespace
/// collapsed, stripped to ASCII and truncated to their slot.
pub fn encode_puzzle_record(puzzle: &Puzzle) -> ChessResult<[u8; EXTENDED_RECORD_SIZE]> {
    if puzzle.solution.len() > MAX_SOLUTION_MOVES {
        return Err(ChessError::TooManyMoves(puzzle.solution.len()));
    }

    let mut out = [0u8; EXTENDED_RECORD_SIZE];
    out[RATING_OFFSET..RATING_OFFSET + 2].copy_from_slice(&puzzle.rating.to_le_bytes());

    let packed = encode_packed_board(&puzzle.position);
    out[FLAGS_OFFSET] = packed[0];
    out[MOVE_COUNT_OFFSET] = puzzle.solution.len() as u8;
    out[BOARD_OFFSET..BOARD_OFFSET + 32].copy_from_slice(&packed[1..]);

    for (slot, mv) in puzzle.solution.iter().enumerate() {
        let offset = MOVES_OFFSET + slot * 2;
        out[offset..offset + 2].copy_from_slice(&mv.pack().to_le_bytes());
    }

    write_text_field(&mut out[THEMES_OFFSET..THEMES_OFFSET + THEMES_LEN], &puzzle.themes);
    write_text_field(&mut out[OPENING_OFFSET..OPENING_OFFSET + OPENING_LEN], &puzzle.opening);

    Ok(out)
}

/// Bytes up to the first NUL (or the whole slot). UTF-8 text is kept as is;
/// only invalid sequences become U+FFFD.
fn read_text_field(slot: &[u8]) -> String {
    let end = slot.iter().position(|&byte| byte == 0).unwrap_or(slot.len());
    String::from_utf8_lossy(&slot[..end]).into_owned()
}

fn write_text_field(slot: &mut [u8], text: &str) {
    let clean = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let payload = clean.bytes().filter(u8::is_ascii).take(slot.len());
    for (dst, byte) in slot.iter_mut().zip(payload) {
        *dst = byte;
    }
}
