//! Bet denominations and power-of-ten scaling.
//!
//! The UI offers base denominations 1-5 which are scaled by a
//! power-of-ten exponent the player can raise or lower before
//! committing. Scaling is pure integer arithmetic; the minimum
//! committed bet is [`crate::constants::BET_UNIT`].

use crate::CasinoError;

/// Base denominations offered by the bet buttons, before scaling.
pub const BET_BASES: [u64; 5] = [1, 2, 3, 4, 5];

/// Smallest power-of-ten exponent (10^1 keeps every bet at least $10).
pub const MIN_EXPONENT: u32 = 1;

/// Largest power-of-ten exponent offered by the UI.
pub const MAX_EXPONENT: u32 = 6;

/// The bet a player is composing before committing it to a round.
///
/// Raising or lowering the exponent clears the selected denomination,
/// forcing an explicit re-selection at the new scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetSelector {
    base: Option<u64>,
    exponent: u32,
}

impl Default for BetSelector {
    fn default() -> Self {
        Self {
            base: None,
            exponent: MIN_EXPONENT,
        }
    }
}

impl BetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a base denomination.
    pub fn select(&mut self, base: u64) -> Result<(), CasinoError> {
        if base == 0 || !BET_BASES.contains(&base) {
            return Err(CasinoError::InvalidBet);
        }
        self.base = Some(base);
        Ok(())
    }

    /// Raise the scale one power of ten. Returns false at the cap.
    pub fn raise(&mut self) -> bool {
        if self.exponent >= MAX_EXPONENT {
            return false;
        }
        self.exponent += 1;
        self.base = None;
        true
    }

    /// Lower the scale one power of ten. Returns false at the floor.
    pub fn lower(&mut self) -> bool {
        if self.exponent <= MIN_EXPONENT {
            return false;
        }
        self.exponent -= 1;
        self.base = None;
        true
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The committed bet amount, once a denomination is selected.
    pub fn amount(&self) -> Option<u64> {
        self.base
            .map(|base| base.saturating_mul(10u64.saturating_pow(self.exponent)))
    }
}
