//! Tunable parameters shared by the engine and its collaborators.

/// Balance granted when an account is first referenced.
pub const STARTING_BALANCE: u64 = 1_000;

/// Smallest stake any game accepts; every bet is a multiple of this.
pub const BET_UNIT: u64 = 10;

/// Number of 52-card decks in the blackjack shoe.
pub const SHOE_DECKS: usize = 8;

/// Dealer stands once the hand reaches this value.
pub const DEALER_STAND: u8 = 17;

/// Adjustment factor applied when deriving slot symbol draw weights
/// from the full-match prize table.
pub const SLOT_ADJUSTMENT: f64 = 1.5;

/// Percentage of a losing slot stake that accrues to the jackpot pool
/// (the house retains the complement).
pub const JACKPOT_CONTRIBUTION_PCT: u64 = 90;

/// Chance (percent) that digging through the trash turns up a prize.
pub const DIG_TRASH_HIT_PCT: u32 = 20;

/// Exclusive upper bound on a dig-trash prize.
pub const DIG_TRASH_MAX_PRIZE: u64 = 1_000;
