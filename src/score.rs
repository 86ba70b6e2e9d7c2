//! Composite scoring over a raw result list.

use crate::config::{ERROR_PENALTY, INFO_PENALTY, WARNING_PENALTY};
use crate::report::ValidationResult;
use crate::rules::RuleSeverity;

/// Reduce a result list to a composite score in [0, 100].
///
/// Every failing result subtracts a severity-weighted penalty from a starting
/// value of 100; the final value is clamped to [0, 100]. A deck with zero
/// failing rules always scores exactly 100.
pub fn composite(results: &[ValidationResult]) -> f64 {
    let deducted: f64 = results
        .iter()
        .filter(|result| !result.is_valid)
        .map(|result| penalty(result.rule.severity))
        .sum();

    (100.0 - deducted).clamp(0.0, 100.0)
}

/// Penalty weight for one failing rule of the given severity.
fn penalty(severity: RuleSeverity) -> f64 {
    match severity {
        RuleSeverity::Error => ERROR_PENALTY,
        RuleSeverity::Warning => WARNING_PENALTY,
        RuleSeverity::Info => INFO_PENALTY,
    }
}
