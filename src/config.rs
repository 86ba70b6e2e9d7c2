/// Minimum number of total copies a deck must contain.
pub const MIN_DECK_SIZE: u32 = 50;

/// Maximum recommended number of total copies.
pub const MAX_DECK_SIZE: u32 = 60;

/// Maximum copies of any single card.
pub const MAX_CARD_COPIES: u32 = 4;

/// Maximum copies of a legendary-rarity card.
pub const MAX_LEGENDARY_COPIES: u32 = 1;

/// Faction assigned to cards that carry no faction of their own.
pub const NEUTRAL_FACTION: &str = "Neutral";

/// Upper cost bound (inclusive) of the low curve bucket.
pub const COST_LOW_MAX: u32 = 2;

/// Upper cost bound (inclusive) of the mid curve bucket; higher costs are high.
pub const COST_MID_MAX: u32 = 5;

/// Upper level bound (inclusive) of the low level bucket.
pub const LEVEL_LOW_MAX: u32 = 3;

/// Upper level bound (inclusive) of the mid level bucket; higher levels are high.
pub const LEVEL_MID_MAX: u32 = 6;

/// Target percentage range for the low curve bucket.
pub const LOW_BUCKET_RANGE: (f64, f64) = (30.0, 50.0);

/// Target percentage range for the mid curve bucket.
pub const MID_BUCKET_RANGE: (f64, f64) = (20.0, 50.0);

/// Target percentage range for the high curve bucket.
pub const HIGH_BUCKET_RANGE: (f64, f64) = (5.0, 30.0);

/// Share of the deck (percent) at which a faction counts as primary.
pub const PRIMARY_FACTION_THRESHOLD: f64 = 20.0;

/// Most factions that may be primary at once.
pub const MAX_PRIMARY_FACTIONS: usize = 2;

/// A single faction at or above this share makes any faction mix acceptable.
pub const DOMINANT_FACTION_THRESHOLD: f64 = 60.0;

/// Minimum percentage of unit-type copies.
pub const UNIT_RATIO_MIN: f64 = 60.0;

/// Advisory upper percentage for unit-type copies, reported in messages.
pub const UNIT_RATIO_IDEAL_MAX: f64 = 80.0;

/// Score penalty per failing error-severity rule.
pub const ERROR_PENALTY: f64 = 30.0;

/// Score penalty per failing warning-severity rule.
pub const WARNING_PENALTY: f64 = 15.0;

/// Score penalty per failing info-severity rule.
pub const INFO_PENALTY: f64 = 5.0;
