//! Content rules: per-card copy limits.

use crate::config::{MAX_CARD_COPIES, MAX_LEGENDARY_COPIES};
use crate::models::DeckCard;
use crate::report::ValidationResult;
use crate::rules::ValidationRule;

/// No entry may exceed [`MAX_CARD_COPIES`] copies.
pub fn card_copy_limit(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let offenders: Vec<&DeckCard> = deck
        .iter()
        .filter(|entry| entry.quantity > MAX_CARD_COPIES)
        .collect();

    if offenders.is_empty() {
        return ValidationResult::pass(
            rule,
            format!("All cards are within the {}-copy limit", MAX_CARD_COPIES),
        );
    }

    ValidationResult::fail(
        rule,
        format!(
            "{} card(s) exceed the {}-copy limit",
            offenders.len(),
            MAX_CARD_COPIES
        ),
    )
    .with_details(offender_list(&offenders))
    .with_affected_cards(offender_uuids(&offenders))
}

/// No legendary-rarity entry may exceed [`MAX_LEGENDARY_COPIES`] copies.
pub fn legendary_copy_limit(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let offenders: Vec<&DeckCard> = deck
        .iter()
        .filter(|entry| entry.card.is_legendary() && entry.quantity > MAX_LEGENDARY_COPIES)
        .collect();

    if offenders.is_empty() {
        return ValidationResult::pass(
            rule,
            format!(
                "All legendary cards are within the {}-copy limit",
                MAX_LEGENDARY_COPIES
            ),
        );
    }

    ValidationResult::fail(
        rule,
        format!(
            "{} legendary card(s) exceed the {}-copy limit",
            offenders.len(),
            MAX_LEGENDARY_COPIES
        ),
    )
    .with_details(offender_list(&offenders))
    .with_affected_cards(offender_uuids(&offenders))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn offender_list(offenders: &[&DeckCard]) -> String {
    offenders
        .iter()
        .map(|entry| format!("{} ({} copies)", entry.card.name, entry.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

fn offender_uuids(offenders: &[&DeckCard]) -> Vec<String> {
    offenders
        .iter()
        .map(|entry| entry.card.uuid.clone())
        .collect()
}
