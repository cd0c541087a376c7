use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod exhaustive;

pub use exhaustive::{exists_solution_for_selection, solve_all};

/// One way to reproduce a target: 3 card indices plus a clockwise
/// quarter-turn count for each, positionally paired.
///
/// Invariant: `cards` is always sorted ascending. Solution equality and
/// deduplication rely on this normalization, and `solve_all` emits
/// solutions in lexicographic (cards, rots) order, which is also the
/// tie-break used when a generator accepts a multi-solution puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub cards: [u8; 3],
    pub rots: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("selection must contain exactly 3 card indices, got {0}")]
    SelectionSize(usize),
    #[error("selection index {index} out of range for deck of {deck_len} cards")]
    IndexOutOfRange { index: u8, deck_len: usize },
    #[error("selection contains card index {0} more than once")]
    DuplicateIndex(u8),
}
