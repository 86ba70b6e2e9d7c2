//! Shared fixtures for the deckcheck integration tests.
//!
//! Provides small card constructors and `balanced_deck()`, a deck that
//! satisfies every rule in the catalog.

use deckcheck::{Card, DeckCard};

/// A minimal card with the given identity; every optional field unset.
pub fn card(uuid: &str, name: &str) -> Card {
    Card {
        uuid: uuid.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

/// A unit card with the given cost, level, and faction.
pub fn unit(uuid: &str, name: &str, cost: u32, level: u32, faction: &str) -> Card {
    let mut c = card(uuid, name);
    c.cost = Some(cost);
    c.level = Some(level);
    c.faction = Some(faction.to_string());
    c.type_field = Some("Unit".to_string());
    c
}

/// A command card with the given cost, level, and faction.
pub fn command(uuid: &str, name: &str, cost: u32, level: u32, faction: &str) -> Card {
    let mut c = card(uuid, name);
    c.cost = Some(cost);
    c.level = Some(level);
    c.faction = Some(faction.to_string());
    c.type_field = Some("Command".to_string());
    c
}

/// `quantity` copies of the given card, no partition label.
pub fn entry(card: Card, quantity: u32) -> DeckCard {
    DeckCard::new(card, quantity)
}

/// A 54-card deck that satisfies every rule in the catalog.
///
/// 22 / 22 / 10 copies in the low / mid / high buckets on both cost and
/// level, 38 unit copies (70.4%), and exactly two primary factions
/// (Zeon 28, Federation 26). No entry exceeds 4 copies and nothing is
/// legendary.
pub fn balanced_deck() -> Vec<DeckCard> {
    let mut deck = Vec::new();

    // Low bucket: 22 Zeon unit copies at cost 2 / level 2.
    for i in 0..5 {
        deck.push(entry(
            unit(
                &format!("zeon-low-{}", i),
                &format!("Zaku Patrol {}", i),
                2,
                2,
                "Zeon",
            ),
            4,
        ));
    }
    deck.push(entry(unit("zeon-low-5", "Zaku Patrol 5", 2, 2, "Zeon"), 2));

    // Mid bucket: 16 Federation unit copies plus 6 Zeon command copies at
    // cost 4 / level 5.
    for i in 0..4 {
        deck.push(entry(
            unit(
                &format!("fed-mid-{}", i),
                &format!("GM Squad {}", i),
                4,
                5,
                "Federation",
            ),
            4,
        ));
    }
    deck.push(entry(command("zeon-mid-0", "Zeon Offensive", 4, 5, "Zeon"), 4));
    deck.push(entry(command("zeon-mid-1", "Mobile Assault", 4, 5, "Zeon"), 2));

    // High bucket: 10 Federation command copies at cost 6 / level 7.
    for i in 0..2 {
        deck.push(entry(
            command(
                &format!("fed-high-{}", i),
                &format!("Operation Odessa {}", i),
                6,
                7,
                "Federation",
            ),
            4,
        ));
    }
    deck.push(entry(
        command("fed-high-2", "Operation Star One", 6, 7, "Federation"),
        2,
    ));

    deck
}
