//! The validation dispatcher: runs the full rule catalog against one deck.

use tracing::debug;

use crate::analysis;
use crate::models::DeckCard;
use crate::report::{DeckValidationSummary, ValidationResult};
use crate::rules::{RuleSeverity, RULES};
use crate::score;
use crate::validators;

/// Validate a deck against every rule in the catalog.
///
/// Runs each rule's validator in catalog order, partitions the failing
/// results by severity, and attaches the composite score. Total for any
/// input, including an empty deck; validation never mutates the deck and
/// never errors.
pub fn validate_deck(deck: &[DeckCard]) -> DeckValidationSummary {
    debug!(
        cards = analysis::total_copies(deck),
        entries = deck.len(),
        rules = RULES.len(),
        "validating deck"
    );

    let table = validators::dispatch_table();
    let mut results = Vec::with_capacity(RULES.len());
    for rule in RULES {
        let result = match table.get(rule.id) {
            Some(validator) => validator(rule, deck),
            // An unmapped id passes neutrally; catalog/table agreement is
            // enforced by the integration tests.
            None => ValidationResult::pass(
                rule,
                format!("No validator registered for rule '{}'", rule.id),
            ),
        };
        results.push(result);
    }

    let summary = summarize(results);
    debug!(
        score = summary.score,
        errors = summary.errors.len(),
        warnings = summary.warnings.len(),
        info = summary.info.len(),
        "deck validation complete"
    );
    summary
}

/// Partition the failing results by severity and attach the composite score.
fn summarize(results: Vec<ValidationResult>) -> DeckValidationSummary {
    let total_results = results.len();
    let score = score::composite(&results);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut info = Vec::new();
    for result in results.into_iter().filter(|result| !result.is_valid) {
        match result.rule.severity {
            RuleSeverity::Error => errors.push(result),
            RuleSeverity::Warning => warnings.push(result),
            RuleSeverity::Info => info.push(result),
        }
    }

    DeckValidationSummary {
        is_valid: errors.is_empty(),
        total_results,
        errors,
        warnings,
        info,
        score,
    }
}
