//! The card-lookup seam between the engine and the card database.
//!
//! The engine never fetches cards itself. The surrounding application
//! implements [`CardProvider`] over its card store and uses
//! [`assemble_deck`] to turn raw deck rows into the engine's input before
//! calling [`validate_deck`](crate::engine::validate_deck).

use serde::{Deserialize, Serialize};

use crate::error::{DeckcheckError, Result};
use crate::models::{Card, DeckCard};

// ---------------------------------------------------------------------------
// CardProvider
// ---------------------------------------------------------------------------

/// Card lookup contract implemented by the card database.
pub trait CardProvider {
    /// Resolve a card by uuid, or `None` if no such card exists.
    fn card_by_uuid(&self, uuid: &str) -> Result<Option<Card>>;
}

// ---------------------------------------------------------------------------
// Deck assembly
// ---------------------------------------------------------------------------

/// One raw deck row as stored by the site: a card reference with a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    pub uuid: String,
    pub quantity: u32,
    pub category: Option<String>,
}

/// Resolve raw deck rows into engine input.
///
/// Fails with [`DeckcheckError::CardNotFound`] for an unknown uuid and
/// [`DeckcheckError::InvalidArgument`] for a zero quantity. Entry order is
/// preserved; duplicate uuids are kept as-is (callers pre-aggregate copies
/// per card).
pub fn assemble_deck<P: CardProvider>(
    provider: &P,
    entries: &[DeckEntry],
) -> Result<Vec<DeckCard>> {
    let mut deck = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.quantity == 0 {
            return Err(DeckcheckError::InvalidArgument(format!(
                "Quantity for card '{}' must be positive",
                entry.uuid
            )));
        }

        let card = provider
            .card_by_uuid(&entry.uuid)?
            .ok_or_else(|| DeckcheckError::CardNotFound(entry.uuid.clone()))?;

        deck.push(DeckCard {
            card,
            quantity: entry.quantity,
            category: entry.category.clone(),
        });
    }
    Ok(deck)
}
