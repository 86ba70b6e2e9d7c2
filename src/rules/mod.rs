//! Validation rule descriptors and the fixed rule catalog.

pub mod registry;

pub use registry::{rule_by_id, RULES};

use serde::Serialize;

// ---------------------------------------------------------------------------
// RuleCategory / RuleSeverity
// ---------------------------------------------------------------------------

/// What aspect of the deck a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleCategory {
    /// Overall deck shape (size).
    Structure,
    /// Per-card composition (copy limits).
    Content,
    /// Statistical shape (curves, ratios, faction focus).
    Balance,
    /// Banlist / format checks. Reserved; no current rule uses it.
    Legality,
}

/// How a failing rule affects the deck's standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleSeverity {
    /// Blocks validity.
    Error,
    /// Flagged but non-blocking.
    Warning,
    /// Advisory only.
    Info,
}

// ---------------------------------------------------------------------------
// ValidationRule
// ---------------------------------------------------------------------------

/// Static descriptor for one validation rule.
///
/// Every descriptor lives in [`RULES`]; a [`ValidationResult`](crate::report::ValidationResult)
/// always carries a copy of the descriptor it was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Stable string key, also the dispatch-table key.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: RuleCategory,
    pub severity: RuleSeverity,
}
