//! Remediation suggestions derived from a validation summary.

use crate::report::{DeckValidationSummary, ValidationResult};

/// Derive short remediation hints from a completed summary.
///
/// One suggestion per failing result, errors first, then warnings, then info.
/// Purely derived from the summary; the original deck is never consulted. A
/// summary with no failing results yields an empty list.
pub fn suggestions(summary: &DeckValidationSummary) -> Vec<String> {
    summary
        .errors
        .iter()
        .chain(summary.warnings.iter())
        .chain(summary.info.iter())
        .map(suggestion_for)
        .collect()
}

/// The remediation hint when one exists, the summary message otherwise.
fn suggestion_for(result: &ValidationResult) -> String {
    match &result.details {
        Some(details) => format!("{}: {}", result.rule.name, details),
        None => format!("{}: {}", result.rule.name, result.message),
    }
}
