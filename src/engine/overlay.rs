use crate::grid::Grid;
use crate::types::Symbol;

/// Overlay one cell from 3 cards.
///
/// Rules:
/// - Empty inputs are discarded; all-empty resolves to empty and is valid.
/// - A single color may stack at any multiplicity (B+B+N -> B).
/// - Distinct colors mix only in a strict 1:1 (or 1:1:1) ratio; the result
///   is the mask union mapped back to its mixed symbol (R+B -> P,
///   R+B+Y -> K).
/// - Any imbalanced mixture (B+B+Y) resolves to empty and is invalid.
#[inline]
pub fn overlay_cell(values: [Symbol; 3]) -> (Symbol, bool) {
    // Multiplicity per mask; inputs are primaries at the card level, but
    // the counting is well-defined for the whole alphabet.
    let mut counts = [0u8; 8];
    let mut union: u8 = 0;
    let mut non_empty = 0u8;
    for v in values {
        let m = v.mask();
        if m != 0 {
            counts[m as usize] += 1;
            union |= m;
            non_empty += 1;
        }
    }

    if non_empty == 0 {
        return (Symbol::Empty, true);
    }

    let distinct = counts.iter().filter(|&&n| n > 0).count();

    // One color only: stacking is allowed at any multiplicity.
    if distinct == 1 {
        return (Symbol::from_mask(union), true);
    }

    // Several colors: valid only when each appears exactly once.
    if counts.iter().all(|&n| n <= 1) {
        return (Symbol::from_mask(union), true);
    }

    (Symbol::Empty, false)
}

/// Overlay 3 full grids cell by cell.
///
/// The result grid is always fully populated (invalid cells resolve to
/// empty); the flag is false if any cell was invalid. Callers must check
/// the flag before trusting equality against a target.
pub fn overlay(cards: [Grid; 3]) -> (Grid, bool) {
    let mut target = Grid::new();
    let mut ok = true;
    for idx in 0u8..9u8 {
        let (sym, valid) = overlay_cell([cards[0].get(idx), cards[1].get(idx), cards[2].get(idx)]);
        if !valid {
            ok = false;
        }
        target.set(idx, sym);
    }
    (target, ok)
}
