use thiserror::Error;

pub type ChessResult<T> = Result<T, ChessError>;

/// Every recoverable failure the library reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The provided FEN string is invalid or could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
    /// Long algebraic move text such as `e7e8q` could not be parsed.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),
    /// Pack header does not start with `CPZ1`.
    #[error("bad pack magic {0:02x?}, expected \"CPZ1\"")]
    BadMagic([u8; 4]),
    #[error("{what} needs {expected} bytes, got {actual}")]
    BufferTooShort {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("record size {0} is below the 96-byte minimum")]
    RecordSizeTooSmall(u16),
    #[error("square {square} holds invalid piece nibble {value}")]
    InvalidPieceNibble { square: u8, value: u8 },
    #[error("pack is {actual} bytes but its header implies {expected}")]
    PackSizeMismatch { expected: usize, actual: usize },
    #[error("puzzle index {index} out of range for {count} puzzles")]
    PuzzleIndexOutOfRange { index: u32, count: u32 },
    #[error("illegal solution move {text} at ply {ply}")]
    IllegalSolutionMove { ply: usize, text: String },
    #[error("solution has {0} moves, at most 24 fit in a record")]
    TooManyMoves(usize),
    #[error("puzzle CSV is missing required columns: {0}")]
    MissingCsvColumns(String),
}
