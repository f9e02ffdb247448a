//! Value types shared by every layer of the engine.
//!
//! Squares are plain `u8` indices (`rank * 8 + file`, a1 = 0, h8 = 63) and
//! pieces are the 13-state tagged value stored nibble-for-nibble in packs.

pub use crate::game_state::game_state::BoardState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind ignoring color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Piece type number, `1..=6`.
    #[inline]
    pub const fn code(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Board cell contents. Discriminants are the on-disk nibble values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    #[default]
    None = 0,
    LightPawn = 1,
    LightKnight = 2,
    LightBishop = 3,
    LightRook = 4,
    LightQueen = 5,
    LightKing = 6,
    DarkPawn = 7,
    DarkKnight = 8,
    DarkBishop = 9,
    DarkRook = 10,
    DarkQueen = 11,
    DarkKing = 12,
}

const PIECES_BY_CODE: [Piece; 13] = [
    Piece::None,
    Piece::LightPawn,
    Piece::LightKnight,
    Piece::LightBishop,
    Piece::LightRook,
    Piece::LightQueen,
    Piece::LightKing,
    Piece::DarkPawn,
    Piece::DarkKnight,
    Piece::DarkBishop,
    Piece::DarkRook,
    Piece::DarkQueen,
    Piece::DarkKing,
];

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        let offset = match color {
            Color::Light => 0,
            Color::Dark => 6,
        };
        PIECES_BY_CODE[kind.code() as usize + offset]
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code as usize >= PIECES_BY_CODE.len() {
            return None;
        }
        Some(PIECES_BY_CODE[code as usize])
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::None)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.code() {
            1..=6 => Some(Color::Light),
            7..=12 => Some(Color::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Piece type `1..=6` regardless of color, `0` for an empty square.
    #[inline]
    pub const fn piece_type(self) -> u8 {
        match self.code() {
            0 => 0,
            code @ 1..=6 => code,
            code => code - 6,
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self.piece_type() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Promotion choice carried by a move. Discriminants are the packed 4-bit codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Promotion {
    #[default]
    None = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    /// Stand-in for a packed code outside `0..=4`; never generated, so a
    /// move carrying it is never legal.
    Invalid = 15,
}

impl Promotion {
    /// Emission order used by pawn move generation.
    pub const CHOICES: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Promotion::None),
            1 => Some(Promotion::Knight),
            2 => Some(Promotion::Bishop),
            3 => Some(Promotion::Rook),
            4 => Some(Promotion::Queen),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn piece_kind(self) -> Option<PieceKind> {
        match self {
            Promotion::None => None,
            Promotion::Knight => Some(PieceKind::Knight),
            Promotion::Bishop => Some(PieceKind::Bishop),
            Promotion::Rook => Some(PieceKind::Rook),
            Promotion::Queen => Some(PieceKind::Queen),
            Promotion::Invalid => None,
        }
    }
}

/// Castling rights bitmask: K, Q, k, q from bit 0 upward.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 7
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 3
}

#[inline]
pub const fn make_square(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Validity check for a signed index produced by offset arithmetic.
#[inline]
pub const fn is_valid_square(square: i16) -> bool {
    square >= 0 && square < 64
}
