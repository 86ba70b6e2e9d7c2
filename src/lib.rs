//! Deck validation and scoring engine.
//!
//! `deckcheck` is the rules engine behind a community trading-card database's
//! deck builder. Given a deck (a list of card + quantity entries), it runs a
//! fixed catalog of structure, content, and balance rules, partitions the
//! failures by severity, reduces them to a 0-100 composite score, and can
//! derive short remediation suggestions. The engine is a pure library: it
//! performs no I/O, never mutates its input, and never persists a result.
//!
//! # Quick start
//!
//! ```
//! use deckcheck::{suggestions, validate_deck, Card, DeckCard};
//!
//! let zaku = Card {
//!     uuid: "uuid-001".into(),
//!     name: "Zaku II".into(),
//!     cost: Some(2),
//!     ..Default::default()
//! };
//! let deck = vec![DeckCard::new(zaku, 4)];
//!
//! let summary = validate_deck(&deck);
//! assert!(!summary.is_valid); // far below the 50-card minimum
//! for hint in suggestions(&summary) {
//!     println!("{}", hint);
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod provider;
pub mod report;
pub mod rules;
pub mod score;
pub mod suggest;
pub mod validators;

pub use engine::validate_deck;
pub use error::{DeckcheckError, Result};
pub use models::{deck_from_json, deck_to_json, Card, DeckCard};
pub use provider::{assemble_deck, CardProvider, DeckEntry};
pub use report::{DeckValidationSummary, ValidationResult};
pub use rules::{rule_by_id, RuleCategory, RuleSeverity, ValidationRule, RULES};
pub use suggest::suggestions;
