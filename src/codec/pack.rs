//! Read-only view over a whole pack held in memory.

use crate::codec::pack_header::{decode_pack_header, PackHeader};
use crate::codec::puzzle_record::{decode_puzzle_record, Puzzle};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{PACK_HEADER_SIZE, RECORD_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct PackView<'a> {
    header: PackHeader,
    data: &'a [u8],
}

impl<'a> PackView<'a> {
    /// Validates magic, a usable record stride, and that the buffer holds
    /// exactly `puzzle_count` records after the header.
    pub fn from_bytes(data: &'a [u8]) -> ChessResult<Self> {
        let header = decode_pack_header(data)?;

        if (header.record_size as usize) < RECORD_SIZE {
            return Err(ChessError::RecordSizeTooSmall(header.record_size));
        }

        let expected = header.expected_pack_len().unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(ChessError::PackSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { header, data })
    }

    #[inline]
    pub fn header(&self) -> &PackHeader {
        &self.header
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.header.puzzle_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.header.puzzle_count == 0
    }

    /// Byte offset of record `index`: `18 + index * record_size`.
    #[inline]
    pub fn record_offset(&self, index: u32) -> usize {
        PACK_HEADER_SIZE + index as usize * self.header.record_size as usize
    }

    pub fn record_bytes(&self, index: u32) -> ChessResult<&'a [u8]> {
        if index >= self.header.puzzle_count {
            return Err(ChessError::PuzzleIndexOutOfRange {
                index,
                count: self.header.puzzle_count,
            });
        }
        let start = self.record_offset(index);
        Ok(&self.data[start..start + self.header.record_size as usize])
    }

    pub fn puzzle(&self, index: u32) -> ChessResult<Puzzle> {
        decode_puzzle_record(self.record_bytes(index)?)
    }

    pub fn puzzles(&self) -> impl Iterator<Item = ChessResult<Puzzle>> + '_ {
        (0..self.header.puzzle_count).map(move |index| self.puzzle(index))
    }
}

#[cfg(test)]
mod tests {
    use super::PackView;
    use crate::codec::pack_header::{encode_pack_header, PackHeader};
    use crate::codec::puzzle_record::{encode_puzzle_record, Puzzle};
    use crate::errors::ChessError;
    use crate::game_state::game_state::BoardState;
    use crate::moves::chess_move::Move;

    fn two_puzzle_pack() -> Vec<u8> {
        let header = PackHeader {
            record_size: 128,
            puzzle_count: 2,
            rating_min: 700,
            rating_max: 750,
            reserved: [0; 4],
        };
        let mut bytes = encode_pack_header(&header).to_vec();
        for (rating, first) in [(700u16, Move::new(12, 28)), (750, Move::new(11, 27))] {
            let puzzle = Puzzle {
                rating,
                position: BoardState::new_game().expect("starting FEN should parse"),
                solution: vec![first],
                themes: "opening".to_owned(),
                opening: String::new(),
            };
            bytes.extend_from_slice(&encode_puzzle_record(&puzzle).expect("puzzle should encode"));
        }
        bytes
    }

    #[test]
    fn reads_records_by_index() {
        let bytes = two_puzzle_pack();
        let pack = PackView::from_bytes(&bytes).expect("pack should load");

        assert_eq!(pack.len(), 2);
        assert_eq!(pack.record_offset(1), 18 + 128);

        let second = pack.puzzle(1).expect("second puzzle should decode");
        assert_eq!(second.rating, 750);
        assert_eq!(second.solution, vec![Move::new(11, 27)]);
        assert_eq!(second.themes, "opening");

        let ratings: Vec<u16> = pack
            .puzzles()
            .map(|puzzle| puzzle.expect("puzzle should decode").rating)
            .collect();
        assert_eq!(ratings, vec![700, 750]);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let bytes = two_puzzle_pack();
        let pack = PackView::from_bytes(&bytes).expect("pack should load");
        assert_eq!(
            pack.puzzle(2),
            Err(ChessError::PuzzleIndexOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn size_and_stride_are_checked() {
        let mut bytes = two_puzzle_pack();
        bytes.pop();
        assert_eq!(
            PackView::from_bytes(&bytes).map(|pack| pack.len()),
            Err(ChessError::PackSizeMismatch {
                expected: 18 + 256,
                actual: 18 + 255
            })
        );

        let mut small_stride = two_puzzle_pack();
        small_stride[4..6].copy_from_slice(&64u16.to_le_bytes());
        assert_eq!(
            PackView::from_bytes(&small_stride).map(|pack| pack.len()),
            Err(ChessError::RecordSizeTooSmall(64))
        );
    }
}
