//! Randomized candidate production: random cards, and full deck+target
//! candidates with a planted secret solution.
//!
//! This module and the generator's retry loop are the only places
//! randomness enters the system; every function takes an explicit RNG so
//! candidate sequences are reproducible from a seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{Card, Deck};
use crate::engine::overlay::overlay;
use crate::grid::Grid;
use crate::types::PRIMARIES;

/// Produce a card with `density.min(9)` colored cells: distinct coordinates
/// drawn uniformly without replacement, each assigned a uniform primary.
pub fn random_card<R: Rng>(rng: &mut R, density: u8) -> Card {
    let mut coords: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    coords.shuffle(rng);

    let mut card = Grid::new();
    for &idx in coords.iter().take(density.min(9) as usize) {
        let color = PRIMARIES[rng.gen_range(0..PRIMARIES.len())];
        card.set(idx, color);
    }
    card
}

/// Build a 9-card deck plus a target obtained by overlaying a secretly
/// selected, secretly rotated card triple.
///
/// Returns `None` when the draw is unusable: the planted overlay is
/// invalid, the target center is colored while `require_center_white` is
/// set, or the target's black/mixed cell counts fall outside
/// [`max_black`] / [`min_mixed`]. Target counts are evaluated from the
/// target's own cells only, never from the cards that produced it.
pub fn make_candidate<R: Rng>(
    rng: &mut R,
    density: u8,
    min_mixed: u8,
    max_black: u8,
    require_center_white: bool,
) -> Option<(Deck, Grid)> {
    let mut deck: Deck = [Grid::new(); 9];
    for card in &mut deck {
        *card = random_card(rng, density);
    }

    // Secret planted solution: 3 distinct indices plus independent rotations.
    let mut indices: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    indices.shuffle(rng);
    let picked = [indices[0], indices[1], indices[2]];
    let rots: [u8; 3] = [
        rng.gen_range(0..4u8),
        rng.gen_range(0..4u8),
        rng.gen_range(0..4u8),
    ];

    let mats = [
        deck[picked[0] as usize].rotated(rots[0]),
        deck[picked[1] as usize].rotated(rots[1]),
        deck[picked[2] as usize].rotated(rots[2]),
    ];
    let (target, ok) = overlay(mats);
    if !ok {
        return None;
    }

    if require_center_white && !target.center_empty() {
        return None;
    }
    if target.black_count() > max_black {
        return None;
    }
    if target.mixed_count() < min_mixed {
        return None;
    }

    Some((deck, target))
}
