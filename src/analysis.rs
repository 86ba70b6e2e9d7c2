//! Deck aggregation shared by the balance validators.
//!
//! Exposed publicly so the surrounding site can render curve charts and
//! faction breakdowns without running a full validation pass. Every function
//! is guarded against empty decks: zero-total buckets report 0%, never NaN.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config;
use crate::models::{Card, DeckCard};

// ---------------------------------------------------------------------------
// CurveBuckets
// ---------------------------------------------------------------------------

/// Copy counts bucketed into low / mid / high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveBuckets {
    pub low: u32,
    pub mid: u32,
    pub high: u32,
}

impl CurveBuckets {
    /// Total copies across all three buckets.
    pub fn total(&self) -> u32 {
        self.low + self.mid + self.high
    }

    /// Low bucket as a percentage of the total.
    pub fn low_pct(&self) -> f64 {
        percentage(self.low, self.total())
    }

    /// Mid bucket as a percentage of the total.
    pub fn mid_pct(&self) -> f64 {
        percentage(self.mid, self.total())
    }

    /// High bucket as a percentage of the total.
    pub fn high_pct(&self) -> f64 {
        percentage(self.high, self.total())
    }
}

// ---------------------------------------------------------------------------
// DeckStats
// ---------------------------------------------------------------------------

/// Composite aggregation over one deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total_cards: u32,
    pub cost_curve: CurveBuckets,
    pub level_curve: CurveBuckets,
    pub faction_counts: BTreeMap<String, u32>,
    pub unit_percentage: f64,
}

/// Compute every aggregation for one deck.
pub fn deck_stats(deck: &[DeckCard]) -> DeckStats {
    DeckStats {
        total_cards: total_copies(deck),
        cost_curve: cost_curve(deck),
        level_curve: level_curve(deck),
        faction_counts: faction_counts(deck),
        unit_percentage: unit_percentage(deck),
    }
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

/// Total number of copies across all entries.
pub fn total_copies(deck: &[DeckCard]) -> u32 {
    deck.iter().map(|entry| entry.quantity).sum()
}

/// Bucket copies by printed cost (missing cost counts as 0).
pub fn cost_curve(deck: &[DeckCard]) -> CurveBuckets {
    bucket_copies(deck, config::COST_LOW_MAX, config::COST_MID_MAX, |card| {
        card.cost_value()
    })
}

/// Bucket copies by printed level (missing level counts as 0).
pub fn level_curve(deck: &[DeckCard]) -> CurveBuckets {
    bucket_copies(deck, config::LEVEL_LOW_MAX, config::LEVEL_MID_MAX, |card| {
        card.level_value()
    })
}

/// Copies per faction, with faction-less cards counted under
/// [`NEUTRAL_FACTION`](config::NEUTRAL_FACTION). Keyed by faction name, so
/// iteration order is deterministic.
pub fn faction_counts(deck: &[DeckCard]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for entry in deck {
        *counts
            .entry(entry.card.faction_name().to_string())
            .or_insert(0) += entry.quantity;
    }
    counts
}

/// Percentage of copies whose type reads as a unit.
pub fn unit_percentage(deck: &[DeckCard]) -> f64 {
    let units: u32 = deck
        .iter()
        .filter(|entry| entry.card.is_unit())
        .map(|entry| entry.quantity)
        .sum();
    percentage(units, total_copies(deck))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `part` as a percentage of `total`; 0 when the total is 0.
pub fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

fn bucket_copies<F>(deck: &[DeckCard], low_max: u32, mid_max: u32, key: F) -> CurveBuckets
where
    F: Fn(&Card) -> u32,
{
    let mut curve = CurveBuckets::default();
    for entry in deck {
        let value = key(&entry.card);
        if value <= low_max {
            curve.low += entry.quantity;
        } else if value <= mid_max {
            curve.mid += entry.quantity;
        } else {
            curve.high += entry.quantity;
        }
    }
    curve
}
