//! 18-byte CPZ1 pack header.
//!
//! | bytes  | field                      |
//! |--------|----------------------------|
//! | 0..4   | magic `CPZ1`               |
//! | 4..6   | record size, u16 LE        |
//! | 6..10  | puzzle count, u32 LE       |
//! | 10..12 | rating min, u16 LE         |
//! | 12..14 | rating max, u16 LE         |
//! | 14..18 | reserved                   |

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{PACK_HEADER_SIZE, PACK_MAGIC};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackHeader {
    pub record_size: u16,
    pub puzzle_count: u32,
    pub rating_min: u16,
    pub rating_max: u16,
    pub reserved: [u8; 4],
}

impl PackHeader {
    /// Total pack length implied by the header, `None` on overflow.
    pub fn expected_pack_len(&self) -> Option<usize> {
        (self.puzzle_count as usize)
            .checked_mul(self.record_size as usize)?
            .checked_add(PACK_HEADER_SIZE)
    }
}

/// Only the magic is checked. `record_size` is returned as stored; callers
/// must sanity-check it before using it as a stride.
pub fn decode_pack_header(data: &[u8]) -> ChessResult<PackHeader> {
    if data.len() < PACK_HEADER_SIZE {
        return Err(ChessError::BufferTooShort {
            what: "pack header",
            expected: PACK_HEADER_SIZE,
            actual: data.len(),
        });
    }

    let magic = [data[0], data[1], data[2], data[3]];
    if magic != PACK_MAGIC {
        return Err(ChessError::BadMagic(magic));
    }

    Ok(PackHeader {
        record_size: u16::from_le_bytes([data[4], data[5]]),
        puzzle_count: u32::from_le_bytes([data[6], data[7], data[8], data[9]]),
        rating_min: u16::from_le_bytes([data[10], data[11]]),
        rating_max: u16::from_le_bytes([data[12], data[13]]),
        reserved: [data[14], data[15], data[16], data[17]],
    })
}

pub fn encode_pack_header(header: &PackHeader) -> [u8; PACK_HEADER_SIZE] {
    let mut out = [0u8; PACK_HEADER_SIZE];
    out[0..4].copy_from_slice(&PACK_MAGIC);
    out[4..6].copy_from_slice(&header.record_size.to_le_bytes());
    out[6..10].copy_from_slice(&header.puzzle_count.to_le_bytes());
    out[10..12].copy_from_slice(&header.rating_min.to_le_bytes());
    out[12..14].copy_from_slice(&header.rating_max.to_le_bytes());
    out[14..18].copy_from_slice(&header.reserved);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_fields() {
        let mut data = [0u8; PACK_HEADER_SIZE];
        data[0..4].copy_from_slice(b"CPZ1");
        data[4..6].copy_from_slice(&96u16.to_le_bytes());
        data[6..10].copy_from_slice(&10u32.to_le_bytes());
        data[10..12].copy_from_slice(&700u16.to_le_bytes());
        data[12..14].copy_from_slice(&980u16.to_le_bytes());

        let header = decode_pack_header(&data).expect("header should decode");
        assert_eq!(
            header,
            PackHeader {
                record_size: 96,
                puzzle_count: 10,
                rating_min: 700,
                rating_max: 980,
                reserved: [0; 4],
            }
        );
        assert_eq!(header.expected_pack_len(), Some(18 + 960));
        assert_eq!(encode_pack_header(&header), data);
    }

    #[test]
    fn any_other_magic_is_rejected() {
        let mut data = [0u8; PACK_HEADER_SIZE];
        data[0..4].copy_from_slice(b"CPZ2");
        assert_eq!(
            decode_pack_header(&data),
            Err(ChessError::BadMagic(*b"CPZ2"))
        );

        data[0..4].copy_from_slice(b"cpz1");
        assert!(decode_pack_header(&data).is_err());
    }

    #[test]
    fn record_size_is_not_validated_here() {
        let header = PackHeader {
            record_size: 3,
            puzzle_count: u32::MAX,
            ..PackHeader::default()
        };
        let decoded = decode_pack_header(&encode_pack_header(&header))
            .expect("odd record size still decodes");
        assert_eq!(decoded.record_size, 3);
    }

    #[test]
    fn short_buffer_is_an_error() {
        assert!(matches!(
            decode_pack_header(b"CPZ1"),
            Err(ChessError::BufferTooShort { actual: 4, .. })
        ));
    }
}
