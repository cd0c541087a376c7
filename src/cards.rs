use crate::grid::Grid;

/// A card is a grid whose cells are either empty or exactly one primary
/// color; mixed colors never appear on a card.
pub type Card = Grid;

/// The 9 candidate cards of one puzzle. Order is significant: it defines
/// the stable indices 0..=8 used by selections and solutions.
pub type Deck = [Card; 9];

pub const DECK_SIZE: usize = 9;

/// Number of cards a solution picks, and rotations it assigns.
pub const SELECTION_SIZE: usize = 3;

pub fn validate_card(card: &Card) -> Result<(), String> {
    for (idx, sym) in card.iter().enumerate() {
        if !(sym.is_empty() || sym.is_primary()) {
            return Err(format!(
                "Card cell {idx} holds mixed color '{}'; cards may only carry primaries",
                sym.letter()
            ));
        }
    }
    Ok(())
}

pub fn validate_deck(deck: &[Card]) -> Result<(), String> {
    if deck.len() != DECK_SIZE {
        return Err(format!(
            "Deck must contain exactly {DECK_SIZE} cards, got {}",
            deck.len()
        ));
    }
    for (i, card) in deck.iter().enumerate() {
        validate_card(card).map_err(|e| format!("Card {i}: {e}"))?;
    }
    Ok(())
}
