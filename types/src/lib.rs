//! Shared data model for the parlor casino engine.
//!
//! This crate carries everything the engine and its front-end
//! collaborators (command layer, simulators) need to agree on: the
//! persisted [`Account`], the [`Outcome`] of a resolved round, bet
//! scaling, tunable constants, and the error taxonomy.

pub mod account;
pub mod bet;
pub mod constants;
mod error;
mod outcome;

pub use account::{Account, PlayerId};
pub use bet::BetSelector;
pub use error::{CasinoError, StoreError};
pub use outcome::{Game, Outcome};
