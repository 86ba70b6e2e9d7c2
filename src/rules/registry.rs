//! The fixed, ordered rule catalog.
//!
//! Adding or removing a rule is a code change, not a runtime operation; the
//! catalog is versioned as a unit with the validators that implement it.

use super::{RuleCategory, RuleSeverity, ValidationRule};

/// Every rule the engine runs, in evaluation order.
pub static RULES: &[ValidationRule] = &[
    ValidationRule {
        id: "min-deck-size",
        name: "Minimum deck size",
        description: "A deck must contain at least 50 cards",
        category: RuleCategory::Structure,
        severity: RuleSeverity::Error,
    },
    ValidationRule {
        id: "max-deck-size",
        name: "Maximum deck size",
        description: "A deck should contain at most 60 cards",
        category: RuleCategory::Structure,
        severity: RuleSeverity::Warning,
    },
    ValidationRule {
        id: "card-copy-limit",
        name: "Card copy limit",
        description: "No more than 4 copies of any single card",
        category: RuleCategory::Content,
        severity: RuleSeverity::Error,
    },
    ValidationRule {
        id: "legendary-copy-limit",
        name: "Legendary copy limit",
        description: "No more than 1 copy of any legendary card",
        category: RuleCategory::Content,
        severity: RuleSeverity::Error,
    },
    ValidationRule {
        id: "cost-distribution",
        name: "Cost distribution",
        description: "The cost curve should stay within the recommended shape",
        category: RuleCategory::Balance,
        severity: RuleSeverity::Warning,
    },
    ValidationRule {
        id: "faction-consistency",
        name: "Faction consistency",
        description: "A deck should focus on at most two factions",
        category: RuleCategory::Balance,
        severity: RuleSeverity::Warning,
    },
    ValidationRule {
        id: "unit-ratio",
        name: "Unit ratio",
        description: "Most of the deck should be unit cards",
        category: RuleCategory::Balance,
        severity: RuleSeverity::Info,
    },
    ValidationRule {
        id: "level-distribution",
        name: "Level distribution",
        description: "The level curve should stay within the recommended shape",
        category: RuleCategory::Balance,
        severity: RuleSeverity::Info,
    },
];

/// Look up a rule descriptor by its stable id.
pub fn rule_by_id(id: &str) -> Option<&'static ValidationRule> {
    RULES.iter().find(|rule| rule.id == id)
}
