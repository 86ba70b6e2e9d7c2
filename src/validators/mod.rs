//! Validator functions for every rule in the catalog.
//!
//! Each validator is a pure, total function from a rule descriptor and a deck
//! to a [`ValidationResult`]: validators never error, never mutate the deck,
//! and normalize missing card fields instead of rejecting them.

pub mod balance;
pub mod content;
pub mod structure;

use std::collections::HashMap;

use crate::models::DeckCard;
use crate::report::ValidationResult;
use crate::rules::ValidationRule;

/// One rule's pure check over a deck.
pub type Validator = fn(&ValidationRule, &[DeckCard]) -> ValidationResult;

/// The fixed id-to-validator dispatch table.
///
/// Every id in [`RULES`](crate::rules::RULES) must have an entry here; the
/// pairing is enforced by the integration tests, not at runtime.
pub fn dispatch_table() -> HashMap<&'static str, Validator> {
    HashMap::from([
        ("min-deck-size", structure::min_deck_size as Validator),
        ("max-deck-size", structure::max_deck_size as Validator),
        ("card-copy-limit", content::card_copy_limit as Validator),
        (
            "legendary-copy-limit",
            content::legendary_copy_limit as Validator,
        ),
        ("cost-distribution", balance::cost_distribution as Validator),
        (
            "faction-consistency",
            balance::faction_consistency as Validator,
        ),
        ("unit-ratio", balance::unit_ratio as Validator),
        (
            "level-distribution",
            balance::level_distribution as Validator,
        ),
    ])
}
