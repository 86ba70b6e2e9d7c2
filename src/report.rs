//! Validation report types: the per-rule result and the full deck summary.

use serde::Serialize;

use crate::rules::ValidationRule;

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The outcome of running one rule against one deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// The descriptor this result was produced by.
    pub rule: ValidationRule,
    pub is_valid: bool,
    /// Short human-readable summary, present on pass and fail alike.
    pub message: String,
    /// Longer explanation or remediation hint, usually only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Uuids of the cards responsible for a failure; empty when not applicable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_cards: Vec<String>,
}

impl ValidationResult {
    /// A passing result with the given summary message.
    pub fn pass(rule: &ValidationRule, message: impl Into<String>) -> Self {
        Self {
            rule: *rule,
            is_valid: true,
            message: message.into(),
            details: None,
            affected_cards: Vec::new(),
        }
    }

    /// A failing result with the given summary message.
    pub fn fail(rule: &ValidationRule, message: impl Into<String>) -> Self {
        Self {
            rule: *rule,
            is_valid: false,
            message: message.into(),
            details: None,
            affected_cards: Vec::new(),
        }
    }

    /// Attach a longer explanation or remediation hint.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach the uuids of the cards responsible for the failure.
    pub fn with_affected_cards(mut self, uuids: Vec<String>) -> Self {
        self.affected_cards = uuids;
        self
    }
}

// ---------------------------------------------------------------------------
// DeckValidationSummary
// ---------------------------------------------------------------------------

/// The full report for one validation run.
///
/// `errors`, `warnings`, and `info` hold the *failing* results partitioned by
/// rule severity; passing results are counted in `total_results` only.
/// `is_valid` is always derived from `errors` being empty. A summary is
/// created fresh on each [`validate_deck`](crate::engine::validate_deck) call
/// and has no identity or persistence of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckValidationSummary {
    pub is_valid: bool,
    /// Number of rules evaluated.
    pub total_results: usize,
    pub errors: Vec<ValidationResult>,
    pub warnings: Vec<ValidationResult>,
    pub info: Vec<ValidationResult>,
    /// Composite score in [0, 100].
    pub score: f64,
}
