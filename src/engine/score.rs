use crate::cards::Deck;
use crate::grid::Grid;
use crate::types::PRIMARIES;

/// Number of cards that place at least one colored cell where the target is
/// empty. A card counts once no matter how many cells leak.
///
/// Ranking/diagnostic input only; never gates puzzle validity.
pub fn kill_count(deck: &Deck, target: &Grid) -> u8 {
    let mut kill = 0u8;
    for card in deck {
        let leaks = (0u8..9u8).any(|idx| target.get(idx).is_empty() && !card.get(idx).is_empty());
        if leaks {
            kill += 1;
        }
    }
    kill
}

/// Continuous difficulty heuristic; lower = harder / less telegraphed.
///
/// Three penalty terms:
/// - leakage onto target-empty cells, 1.5*c + 0.3*c^2 per cell where c
///   cards are colored there;
/// - 4.0 per card carrying a raw primary whose family is absent from the
///   target;
/// - 0.8*(f-7) per cell whose most frequent card value occurs f > 7 times
///   across the deck.
pub fn obviousness(deck: &Deck, target: &Grid) -> f64 {
    let mut score = 0.0f64;

    // A) leakage on empty target cells
    for idx in 0u8..9u8 {
        if target.get(idx).is_empty() {
            let colored = deck.iter().filter(|card| !card.get(idx).is_empty()).count() as f64;
            score += colored * 1.5 + colored * colored * 0.3;
        }
    }

    // B) family leakage
    let present = target.families_present();
    for (i, primary) in PRIMARIES.iter().enumerate() {
        if present[i] {
            continue;
        }
        let offenders = deck.iter().filter(|card| card.contains(*primary)).count() as f64;
        score += offenders * 4.0;
    }

    // C) near-unanimous cell values across the deck
    for idx in 0u8..9u8 {
        let mut counts = [0u8; 8];
        for card in deck {
            counts[(card.get(idx).mask() & 0b111) as usize] += 1;
        }
        let top = counts.iter().copied().max().unwrap_or(0);
        if top > 7 {
            score += f64::from(top - 7) * 0.8;
        }
    }

    score
}
