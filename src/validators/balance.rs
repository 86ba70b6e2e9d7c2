//! Balance rules: curve shape, faction focus, and unit ratio.

use std::collections::BTreeMap;

use crate::analysis::{self, CurveBuckets};
use crate::config::{
    DOMINANT_FACTION_THRESHOLD, HIGH_BUCKET_RANGE, LOW_BUCKET_RANGE, MAX_PRIMARY_FACTIONS,
    MID_BUCKET_RANGE, PRIMARY_FACTION_THRESHOLD, UNIT_RATIO_IDEAL_MAX, UNIT_RATIO_MIN,
};
use crate::models::DeckCard;
use crate::report::ValidationResult;
use crate::rules::ValidationRule;

/// The cost curve must keep each bucket inside its target range.
pub fn cost_distribution(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let curve = analysis::cost_curve(deck);
    check_curve(rule, &curve, "Cost curve", ["0-2", "3-5", "6+"])
}

/// The level curve must keep each bucket inside its target range.
pub fn level_distribution(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let curve = analysis::level_curve(deck);
    check_curve(rule, &curve, "Level curve", ["0-3", "4-6", "7+"])
}

/// A deck may run at most [`MAX_PRIMARY_FACTIONS`] primary factions, unless a
/// single faction dominates at [`DOMINANT_FACTION_THRESHOLD`] percent or more.
pub fn faction_consistency(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let total = analysis::total_copies(deck);
    let counts = analysis::faction_counts(deck);

    let mut primaries = 0usize;
    let mut top_share = 0.0f64;
    for &count in counts.values() {
        let share = analysis::percentage(count, total);
        if share >= PRIMARY_FACTION_THRESHOLD {
            primaries += 1;
        }
        if share > top_share {
            top_share = share;
        }
    }

    let message = format!(
        "{} primary faction(s), largest at {:.1}%",
        primaries, top_share
    );

    if primaries <= MAX_PRIMARY_FACTIONS || top_share >= DOMINANT_FACTION_THRESHOLD {
        return ValidationResult::pass(rule, message);
    }

    ValidationResult::fail(rule, message).with_details(faction_breakdown(&counts))
}

/// Unit-type copies must make up at least [`UNIT_RATIO_MIN`] percent of the
/// deck; [`UNIT_RATIO_IDEAL_MAX`] is the advisory upper end of the range.
pub fn unit_ratio(rule: &ValidationRule, deck: &[DeckCard]) -> ValidationResult {
    let pct = analysis::unit_percentage(deck);
    let message = format!("{:.1}% of the deck are unit cards", pct);

    if pct >= UNIT_RATIO_MIN {
        return ValidationResult::pass(rule, message);
    }

    ValidationResult::fail(rule, message).with_details(format!(
        "Aim for {:.0}-{:.0}% unit cards",
        UNIT_RATIO_MIN, UNIT_RATIO_IDEAL_MAX
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Range-check a bucketed curve. The message always reports all three bucket
/// percentages, valid or not; the target ranges are spelled out on failure.
fn check_curve(
    rule: &ValidationRule,
    curve: &CurveBuckets,
    label: &str,
    bucket_labels: [&str; 3],
) -> ValidationResult {
    let (low, mid, high) = (curve.low_pct(), curve.mid_pct(), curve.high_pct());
    let message = format!(
        "{}: {:.1}% low ({}), {:.1}% mid ({}), {:.1}% high ({})",
        label, low, bucket_labels[0], mid, bucket_labels[1], high, bucket_labels[2]
    );

    let shaped = within(low, LOW_BUCKET_RANGE)
        && within(mid, MID_BUCKET_RANGE)
        && within(high, HIGH_BUCKET_RANGE);

    if shaped {
        return ValidationResult::pass(rule, message);
    }

    ValidationResult::fail(rule, message).with_details(format!(
        "Target ranges: low {:.0}-{:.0}%, mid {:.0}-{:.0}%, high {:.0}-{:.0}%",
        LOW_BUCKET_RANGE.0,
        LOW_BUCKET_RANGE.1,
        MID_BUCKET_RANGE.0,
        MID_BUCKET_RANGE.1,
        HIGH_BUCKET_RANGE.0,
        HIGH_BUCKET_RANGE.1
    ))
}

fn within(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}

/// All faction counts, largest first, ties broken by name.
fn faction_breakdown(counts: &BTreeMap<String, u32>) -> String {
    let mut entries: Vec<(&String, &u32)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .iter()
        .map(|(faction, count)| format!("{}: {}", faction, count))
        .collect::<Vec<_>>()
        .join(", ")
}
