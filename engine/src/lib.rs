//! Casino game engines for parlor.
//!
//! The games themselves are pure state machines over a bet amount and a
//! random source; balances and the shared jackpot live behind the
//! [`Store`] seam and are mutated only through the [`Ledger`]. The
//! [`Floor`] ties both together and exposes the per-game operations the
//! command layer calls.

pub mod casino;

mod floor;
mod ledger;
mod state;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use floor::{Floor, Settled};
pub use ledger::Ledger;
pub use state::{Memory, Store};
