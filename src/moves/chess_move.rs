//! Compact move value and its 16-bit packed form.
//!
//! Layout: bits 0..6 `from`, bits 6..12 `to`, bits 12..16 promotion code.

use crate::game_state::chess_types::{Promotion, Square};

const FROM_SHIFT: u16 = 0;
const TO_SHIFT: u16 = 6;
const PROMOTION_SHIFT: u16 = 12;

const SQUARE_MASK: u16 = 0x3F;
const PROMOTION_MASK: u16 = 0x0F;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Promotion,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: Promotion::None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Promotion) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    /// Sentinel move; never legal.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub const fn pack(self) -> u16 {
        ((self.from as u16 & SQUARE_MASK) << FROM_SHIFT)
            | ((self.to as u16 & SQUARE_MASK) << TO_SHIFT)
            | ((self.promotion.code() as u16 & PROMOTION_MASK) << PROMOTION_SHIFT)
    }

    /// Promotion codes 5..=15 decode as `Promotion::Invalid`.
    #[inline]
    pub const fn unpack(value: u16) -> Self {
        let promotion = match Promotion::from_code(((value >> PROMOTION_SHIFT) & PROMOTION_MASK) as u8) {
            Some(promotion) => promotion,
            None => Promotion::Invalid,
        };
        Self {
            from: ((value >> FROM_SHIFT) & SQUARE_MASK) as Square,
            to: ((value >> TO_SHIFT) & SQUARE_MASK) as Square,
            promotion,
        }
    }
}
