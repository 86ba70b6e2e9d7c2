//! Structure rules: overall deck size.

use crate::analysis;
use crate::config::{MAX_DECK_SIZE, MIN_DECK_SIZE};
use crate::models::DeckCard;
use crate::report::ValidationResult;
use crate::rules::ValidationRule;

/// A deck must contain at least [`MIN_DECK_SIZE`] total copies.
pub fn min_deck_size(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let total = analysis::total_copies(deck);

    if total >= MIN_DECK_SIZE {
        return ValidationResult::pass(rule, format!("Deck contains {} cards", total));
    }

    let shortfall = MIN_DECK_SIZE - total;
    ValidationResult::fail(
        rule,
        format!(
            "Deck contains {} cards, below the minimum of {}",
            total, MIN_DECK_SIZE
        ),
    )
    .with_details(format!(
        "Add {} more card(s) to reach the {}-card minimum",
        shortfall, MIN_DECK_SIZE
    ))
}

/// A deck should contain at most [`MAX_DECK_SIZE`] total copies.
pub fn max_deck_size(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let total = analysis::total_copies(deck);

    if total <= MAX_DECK_SIZE {
        return ValidationResult::pass(rule, format!("Deck contains {} cards", total));
    }

    let excess = total - MAX_DECK_SIZE;
    ValidationResult::fail(
        rule,
        format!(
            "Deck contains {} cards, above the recommended maximum of {}",
            total, MAX_DECK_SIZE
        ),
    )
    .with_details(format!(
        "Trim {} card(s) to keep the deck consistent",
        excess
    ))
}
