use thiserror::Error;

/// Failure surfaced by the backing store, propagated unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("backing store failure: {reason}")]
pub struct StoreError {
    pub reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Everything a game operation can fail with.
///
/// Validation errors are detected before any balance debit, so a
/// rejected operation never leaves a partial mutation behind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CasinoError {
    /// The bet is unset or not positive.
    #[error("bet is missing or not positive")]
    InvalidBet,
    /// The balance cannot cover the required stake.
    #[error("insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: u64, need: u64 },
    /// The action is not valid in the current game state.
    #[error("`{0}` is not valid in the current game state")]
    InvalidAction(&'static str),
    /// The backing store failed; the round stays unresolved.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}
