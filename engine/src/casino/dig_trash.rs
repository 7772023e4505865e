//! Dumpster diving: a free scratch-off with a one-in-five hit rate.

use parlor_types::constants::{DIG_TRASH_HIT_PCT, DIG_TRASH_MAX_PRIZE};

use super::GameRng;

#[derive(Clone, Debug)]
pub struct DigRound {
    /// `Some` when the dig turned something up.
    pub prize: Option<u64>,
    pub narrative: String,
}

pub fn dig(rng: &mut GameRng) -> DigRound {
    if rng.percent(DIG_TRASH_HIT_PCT) {
        let prize = rng.amount_below(DIG_TRASH_MAX_PRIZE);
        DigRound {
            prize: Some(prize),
            narrative: format!("You found ${prize} in the trash!"),
        }
    } else {
        DigRound {
            prize: None,
            narrative: "You found nothing in the trash! Keep digging you dirty rat!".to_string(),
        }
    }
}
