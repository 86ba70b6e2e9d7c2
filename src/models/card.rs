use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// Card — read-only card contract supplied by the card database
// ---------------------------------------------------------------------------

/// A card as supplied by the card-database collaborator.
///
/// The engine never fetches or mutates cards; callers resolve each card before
/// assembling a deck. Numeric fields may be absent (treated as 0 by the
/// validators) and category fields may be absent (treated as missing
/// categories, never as errors).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub uuid: String,
    pub name: String,
    pub cost: Option<u32>,
    pub level: Option<u32>,
    pub faction: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub rarity: Option<String>,
    pub hit_points: Option<u32>,
    pub attack_points: Option<u32>,
    pub clash_points: Option<u32>,
    pub set_code: Option<String>,
    pub number: Option<String>,
}

impl Card {
    /// Printed cost, treating a missing cost as 0.
    pub fn cost_value(&self) -> u32 {
        self.cost.unwrap_or(0)
    }

    /// Printed level, treating a missing level as 0.
    pub fn level_value(&self) -> u32 {
        self.level.unwrap_or(0)
    }

    /// The faction this card belongs to, defaulting to
    /// [`NEUTRAL_FACTION`](config::NEUTRAL_FACTION) when absent.
    pub fn faction_name(&self) -> &str {
        self.faction.as_deref().unwrap_or(config::NEUTRAL_FACTION)
    }

    /// Whether the rarity name marks this card as legendary.
    ///
    /// Matches the substring "legendary" case-insensitively, so a rarity of
    /// "Secret Legendary" qualifies.
    pub fn is_legendary(&self) -> bool {
        matches_keyword(self.rarity.as_deref(), "legendary")
    }

    /// Whether the type name marks this card as a unit.
    ///
    /// Matches the substring "unit" case-insensitively.
    pub fn is_unit(&self) -> bool {
        matches_keyword(self.type_field.as_deref(), "unit")
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Case-insensitive substring match over an optional category name.
fn matches_keyword(value: Option<&str>, keyword: &str) -> bool {
    value
        .map(|v| v.to_lowercase().contains(keyword))
        .unwrap_or(false)
}
