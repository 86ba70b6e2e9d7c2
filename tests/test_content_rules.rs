//! Content rule tests: per-card and legendary copy limits.

mod common;

use deckcheck::rules::{rule_by_id, ValidationRule};
use deckcheck::validators::content::{card_copy_limit, legendary_copy_limit};

fn copy_rule() -> &'static ValidationRule {
    rule_by_id("card-copy-limit").unwrap()
}

fn legendary_rule() -> &'static ValidationRule {
    rule_by_id("legendary-copy-limit").unwrap()
}

// ---------------------------------------------------------------------------
// Card copy limit
// ---------------------------------------------------------------------------

#[test]
fn five_copies_of_one_card_fails_with_details() {
    let deck = vec![common::entry(
        common::unit("u1", "Zaku II", 2, 2, "Zeon"),
        5,
    )];

    let result = card_copy_limit(copy_rule(), &deck);
    assert!(!result.is_valid);
    assert!(result
        .details
        .as_ref()
        .unwrap()
        .contains("Zaku II (5 copies)"));
    assert_eq!(result.affected_cards, vec!["u1".to_string()]);
}

#[test]
fn four_copies_of_each_card_passes() {
    let deck = vec![
        common::entry(common::unit("u1", "Zaku II", 2, 2, "Zeon"), 4),
        common::entry(common::unit("u2", "Gouf", 3, 3, "Zeon"), 4),
    ];

    let result = card_copy_limit(copy_rule(), &deck);
    assert!(result.is_valid);
    assert!(result.affected_cards.is_empty());
}

#[test]
fn every_offender_is_listed() {
    let deck = vec![
        common::entry(common::unit("u1", "Zaku II", 2, 2, "Zeon"), 6),
        common::entry(common::unit("u2", "Gouf", 3, 3, "Zeon"), 4),
        common::entry(common::unit("u3", "Dom", 4, 4, "Zeon"), 5),
    ];

    let result = card_copy_limit(copy_rule(), &deck);
    assert!(!result.is_valid);
    assert!(result.message.contains("2 card(s)"));
    assert_eq!(
        result.affected_cards,
        vec!["u1".to_string(), "u3".to_string()]
    );
    let details = result.details.unwrap();
    assert!(details.contains("Zaku II (6 copies)"));
    assert!(details.contains("Dom (5 copies)"));
}

// ---------------------------------------------------------------------------
// Legendary copy limit
// ---------------------------------------------------------------------------

#[test]
fn two_copies_of_a_secret_legendary_fails() {
    let mut chars_zaku = common::unit("leg-1", "Char's Zaku II", 3, 4, "Zeon");
    chars_zaku.rarity = Some("Secret Legendary".to_string());
    let deck = vec![common::entry(chars_zaku, 2)];

    let result = legendary_copy_limit(legendary_rule(), &deck);
    assert!(!result.is_valid);
    assert_eq!(result.affected_cards, vec!["leg-1".to_string()]);
    assert!(result
        .details
        .as_ref()
        .unwrap()
        .contains("Char's Zaku II (2 copies)"));
}

#[test]
fn one_copy_of_a_legendary_passes() {
    let mut chars_zaku = common::unit("leg-1", "Char's Zaku II", 3, 4, "Zeon");
    chars_zaku.rarity = Some("Legendary".to_string());
    let deck = vec![common::entry(chars_zaku, 1)];

    let result = legendary_copy_limit(legendary_rule(), &deck);
    assert!(result.is_valid);
}

#[test]
fn rarity_match_is_case_insensitive() {
    let mut amuro = common::unit("leg-2", "Amuro's Gundam", 5, 6, "Federation");
    amuro.rarity = Some("LEGENDARY RARE".to_string());
    let deck = vec![common::entry(amuro, 3)];

    let result = legendary_copy_limit(legendary_rule(), &deck);
    assert!(!result.is_valid);
}

#[test]
fn non_legendary_cards_are_ignored() {
    let mut zaku = common::unit("u1", "Zaku II", 2, 2, "Zeon");
    zaku.rarity = Some("Common".to_string());
    let deck = vec![common::entry(zaku, 4)];

    let result = legendary_copy_limit(legendary_rule(), &deck);
    assert!(result.is_valid);
}

#[test]
fn missing_rarity_is_not_legendary() {
    let deck = vec![common::entry(common::unit("u1", "Zaku II", 2, 2, "Zeon"), 4)];

    let result = legendary_copy_limit(legendary_rule(), &deck);
    assert!(result.is_valid);
}
