use serde::{Deserialize, Serialize};

/// Cell alphabet: empty, the three primary colors a card may carry, and the
/// four mixed colors that only ever appear as overlay results.
///
/// Each symbol maps to a 3-bit mask (red=1, blue=2, yellow=4); a mixed
/// symbol's mask is the union of its constituent primaries. The
/// symbol<->mask bijection is relied on by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "N")]
    Empty,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "P")]
    Purple,
    #[serde(rename = "O")]
    Orange,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "K")]
    Black,
}

/// The placeable colors, in canonical mask order.
pub const PRIMARIES: [Symbol; 3] = [Symbol::Red, Symbol::Blue, Symbol::Yellow];

impl Symbol {
    #[inline]
    pub const fn mask(self) -> u8 {
        match self {
            Symbol::Empty => 0,
            Symbol::Red => 1,
            Symbol::Blue => 2,
            Symbol::Purple => 3, // R+B
            Symbol::Yellow => 4,
            Symbol::Orange => 5, // R+Y
            Symbol::Green => 6,  // B+Y
            Symbol::Black => 7,  // R+B+Y
        }
    }

    /// Inverse of [`mask`](Self::mask). Total over the 3 low bits; higher
    /// bits are ignored.
    #[inline]
    pub const fn from_mask(mask: u8) -> Symbol {
        match mask & 0b111 {
            1 => Symbol::Red,
            2 => Symbol::Blue,
            3 => Symbol::Purple,
            4 => Symbol::Yellow,
            5 => Symbol::Orange,
            6 => Symbol::Green,
            7 => Symbol::Black,
            _ => Symbol::Empty,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.mask() == 0
    }

    #[inline]
    pub const fn is_primary(self) -> bool {
        matches!(self, Symbol::Red | Symbol::Blue | Symbol::Yellow)
    }

    /// Mixed (derived) symbols: purple, orange, green, black.
    #[inline]
    pub const fn is_mixed(self) -> bool {
        self.mask().count_ones() >= 2
    }

    /// Family membership: true when `self` contains the given primary,
    /// i.e. `self` is the primary itself or a mixed color derived from it.
    #[inline]
    pub const fn in_family_of(self, primary: Symbol) -> bool {
        self.mask() & primary.mask() != 0
    }

    /// One-letter code used by the wire format and pretty printing.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Symbol::Empty => 'N',
            Symbol::Red => 'R',
            Symbol::Blue => 'B',
            Symbol::Yellow => 'Y',
            Symbol::Purple => 'P',
            Symbol::Orange => 'O',
            Symbol::Green => 'G',
            Symbol::Black => 'K',
        }
    }
}

/// Grid indexing helpers (3x3, row-major)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < 9);
    (idx / 3, idx % 3)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < 3 && c < 3 {
        Some(r * 3 + c)
    } else {
        None
    }
}
