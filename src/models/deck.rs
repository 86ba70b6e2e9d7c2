use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::card::Card;

// ---------------------------------------------------------------------------
// DeckCard — one deck entry: a card with a copy count
// ---------------------------------------------------------------------------

/// One entry in a deck: a card, the number of copies included, and an
/// optional partition label (e.g. "main", "side").
///
/// A deck is an ordered `[DeckCard]`. The engine does not merge duplicate
/// entries for the same card; callers are expected to pre-aggregate copies
/// per card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCard {
    pub card: Card,
    pub quantity: u32,
    pub category: Option<String>,
}

impl DeckCard {
    /// Create an entry with no partition label.
    pub fn new(card: Card, quantity: u32) -> Self {
        Self {
            card,
            quantity,
            category: None,
        }
    }

    /// Set the partition label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

// ---------------------------------------------------------------------------
// JSON import / export
// ---------------------------------------------------------------------------

/// Parse a deck from the site's JSON wire shape (a camelCase array of
/// card + quantity entries).
pub fn deck_from_json(json: &str) -> Result<Vec<DeckCard>> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a deck to the site's JSON wire shape.
pub fn deck_to_json(deck: &[DeckCard]) -> Result<String> {
    Ok(serde_json::to_string(deck)?)
}
