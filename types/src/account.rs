//! Persisted player account and statistics.

use crate::constants::STARTING_BALANCE;

/// Opaque numeric player identity (a Discord snowflake upstream).
pub type PlayerId = u64;

/// A player's durable balance and statistics.
///
/// Accounts are created lazily on first reference and never deleted.
/// All mutation goes through the ledger; the balance can never go
/// negative because every debit is preceded by a sufficiency check.
///
/// The per-game `*_wins` fields count winning rounds. `money_won`
/// accumulates net profit on wins and `money_lost` accumulates the
/// stake on losses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: PlayerId,
    pub balance: u64,
    pub money_won: u64,
    pub money_lost: u64,
    pub slot_wins: u64,
    pub blackjack_wins: u64,
    pub roulette_wins: u64,
    pub video_poker_wins: u64,
    pub dig_trash_wins: u64,
    /// Unix timestamp of the last daily bonus claim (0 = never).
    /// The daily bonus itself lives in the command layer.
    pub last_daily_claim: u64,
}

impl Account {
    /// Fresh account with the starting balance and zeroed statistics.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            balance: STARTING_BALANCE,
            money_won: 0,
            money_lost: 0,
            slot_wins: 0,
            blackjack_wins: 0,
            roulette_wins: 0,
            video_poker_wins: 0,
            dig_trash_wins: 0,
            last_daily_claim: 0,
        }
    }
}
