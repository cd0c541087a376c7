//! Deck-level rejection filters. Applied only when a configuration asks
//! for them (higher difficulty tiers); they reject decks that leak
//! information inconsistent with the target.

use crate::cards::Deck;
use crate::grid::Grid;
use crate::types::PRIMARIES;

/// Family compatibility: if a primary color's family (the primary plus
/// every mixed color containing it) is entirely absent from the target, no
/// card may carry that raw primary anywhere. Such a deck leaks a color that
/// could never have contributed to the target.
pub fn family_compatible(deck: &Deck, target: &Grid) -> bool {
    let present = target.families_present();
    for (i, primary) in PRIMARIES.iter().enumerate() {
        if present[i] {
            continue;
        }
        if deck.iter().any(|card| card.contains(*primary)) {
            return false;
        }
    }
    true
}

/// Center-clean: when the target's center cell is empty, every card's
/// center cell must be empty as well. A colored target center passes
/// unconditionally.
pub fn center_clean(deck: &Deck, target: &Grid) -> bool {
    if !target.center_empty() {
        return true;
    }
    deck.iter().all(|card| card.center().is_empty())
}
