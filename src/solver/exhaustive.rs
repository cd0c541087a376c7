//! Exhaustive, exact search over (card-triple, rotation-triple) space.
//!
//! No heuristics: `solve_all` enumerates every C(n,3) ascending selection
//! and all 4^3 rotation assignments per selection; for a 9-card deck that
//! is at most 84 * 64 = 5,376 overlay evaluations.

use crate::cards::Card;
use crate::engine::overlay::overlay;
use crate::grid::Grid;

use super::{SolveError, Solution};

/// All four rotation states of a card, indexed by quarter-turn count.
#[inline]
fn rotation_table(card: &Card) -> [Grid; 4] {
    let r1 = card.rot90();
    let r2 = r1.rot90();
    let r3 = r2.rot90();
    [*card, r1, r2, r3]
}

/// Scan the 64 rotation assignments of one selection in lexicographic
/// order, appending matches. Stops after the first match if `first_only`.
fn scan_rotations(
    tables: [&[Grid; 4]; 3],
    target: &Grid,
    selection: [u8; 3],
    first_only: bool,
    out: &mut Vec<Solution>,
) {
    for r0 in 0u8..4u8 {
        for r1 in 0u8..4u8 {
            for r2 in 0u8..4u8 {
                let (result, ok) = overlay([
                    tables[0][r0 as usize],
                    tables[1][r1 as usize],
                    tables[2][r2 as usize],
                ]);
                if ok && result == *target {
                    out.push(Solution {
                        cards: selection,
                        rots: [r0, r1, r2],
                    });
                    if first_only {
                        return;
                    }
                }
            }
        }
    }
}

/// Find every (selection, rotation assignment) whose overlay is valid and
/// equals `target` cell for cell.
///
/// Deterministic: selections are enumerated ascending and rotations
/// lexicographically, so the output order is the canonical order of
/// [`Solution`] values.
pub fn solve_all(cards: &[Card], target: &Grid) -> Vec<Solution> {
    let n = cards.len();
    let tables: Vec<[Grid; 4]> = cards.iter().map(rotation_table).collect();

    let mut sols = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                scan_rotations(
                    [&tables[i], &tables[j], &tables[k]],
                    target,
                    [i as u8, j as u8, k as u8],
                    false,
                    &mut sols,
                );
            }
        }
    }
    sols
}

/// Mental-rotation check: given a fixed selection of 3 distinct card
/// indices, does any of its 64 rotation assignments reproduce the target?
///
/// Returns the first match in lexicographic rotation order, with the
/// selection normalized ascending. Errors on a malformed selection
/// (size != 3, out-of-range or duplicate indices).
pub fn exists_solution_for_selection(
    cards: &[Card],
    target: &Grid,
    selection: &[u8],
) -> Result<Option<Solution>, SolveError> {
    if selection.len() != 3 {
        return Err(SolveError::SelectionSize(selection.len()));
    }

    let mut sel = [selection[0], selection[1], selection[2]];
    sel.sort_unstable();
    for &idx in &sel {
        if (idx as usize) >= cards.len() {
            return Err(SolveError::IndexOutOfRange {
                index: idx,
                deck_len: cards.len(),
            });
        }
    }
    if sel[0] == sel[1] || sel[1] == sel[2] {
        let dup = if sel[0] == sel[1] { sel[0] } else { sel[1] };
        return Err(SolveError::DuplicateIndex(dup));
    }

    let tables = [
        rotation_table(&cards[sel[0] as usize]),
        rotation_table(&cards[sel[1] as usize]),
        rotation_table(&cards[sel[2] as usize]),
    ];

    let mut out = Vec::with_capacity(1);
    scan_rotations([&tables[0], &tables[1], &tables[2]], target, sel, true, &mut out);
    Ok(out.into_iter().next())
}
