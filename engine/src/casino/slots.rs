//! Three-reel slot machine with a shared progressive jackpot.
//!
//! Symbols are drawn per reel from a weighted distribution whose
//! weights are inversely proportional to the symbol's full-match prize,
//! so the richest lines are the rarest. Spins that pay nothing feed
//! most of the stake into the jackpot pool; three diamonds pay the pool
//! on top of the line prize.

use parlor_types::constants::{JACKPOT_CONTRIBUTION_PCT, SLOT_ADJUSTMENT};
use parlor_types::Outcome;
use rand::distributions::WeightedIndex;
use std::fmt;

use super::GameRng;

/// Reel faces, ordered richest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Diamond,
    Cherry,
    Lemon,
    Orange,
    Apple,
    Grapes,
    Banana,
}

pub const SYMBOLS: [Symbol; 7] = [
    Symbol::Diamond,
    Symbol::Cherry,
    Symbol::Lemon,
    Symbol::Orange,
    Symbol::Apple,
    Symbol::Grapes,
    Symbol::Banana,
];

impl Symbol {
    /// Stake multiplier for three of this symbol.
    pub fn full_match_multiplier(&self) -> u64 {
        match self {
            Self::Diamond => 100,
            Self::Cherry => 50,
            Self::Lemon => 25,
            Self::Orange => 10,
            Self::Apple => 8,
            Self::Grapes => 5,
            Self::Banana => 2,
        }
    }

    /// Stake multiplier for exactly two of this symbol. Grapes and
    /// bananas pay nothing in pairs.
    pub fn pair_multiplier(&self) -> u64 {
        match self {
            Self::Diamond => 20,
            Self::Cherry => 15,
            Self::Lemon => 10,
            Self::Orange => 6,
            Self::Apple => 3,
            Self::Grapes | Self::Banana => 0,
        }
    }

    /// Stake multiplier for a single appearance. Only diamonds and
    /// cherries pay alone.
    pub fn lone_multiplier(&self) -> u64 {
        match self {
            Self::Diamond => 6,
            Self::Cherry => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emoji = match self {
            Self::Diamond => "\u{1F48E}",
            Self::Cherry => "\u{1F352}",
            Self::Lemon => "\u{1F34B}",
            Self::Orange => "\u{1F34A}",
            Self::Apple => "\u{1F34E}",
            Self::Grapes => "\u{1F347}",
            Self::Banana => "\u{1F34C}",
        };
        f.write_str(emoji)
    }
}

/// Jackpot side effect of a resolved spin, applied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JackpotEvent {
    None,
    /// Add this amount to the shared pool.
    Contribute(u64),
    /// The pool was paid out at this size.
    Paid(u64),
}

/// A resolved spin, ready for the ledger and the renderer.
#[derive(Clone, Debug)]
pub struct SpinRound {
    pub reels: [Symbol; 3],
    pub outcome: Outcome,
    pub jackpot: JackpotEvent,
    pub narrative: String,
}

/// The machine itself: a reel distribution shared by all spins.
pub struct SlotMachine {
    dist: WeightedIndex<f64>,
}

impl SlotMachine {
    pub fn new() -> Self {
        // Weight each symbol inversely to its padded full-match prize.
        let weights = SYMBOLS
            .iter()
            .map(|symbol| 1.0 / (symbol.full_match_multiplier() as f64 * SLOT_ADJUSTMENT));
        Self {
            dist: WeightedIndex::new(weights).expect("full-match prizes are positive"),
        }
    }

    pub fn spin(&self, rng: &mut GameRng) -> [Symbol; 3] {
        std::array::from_fn(|_| SYMBOLS[rng.pick(&self.dist)])
    }

    /// Score a spin against the paytable. `pool` is the current
    /// jackpot; the returned event tells the caller how to adjust it.
    pub fn resolve(&self, reels: [Symbol; 3], bet: u64, pool: u64) -> SpinRound {
        let line = format!("{} {} {}", reels[0], reels[1], reels[2]);

        // Full match first, then best pair, then best lone payer.
        let (multiplier, jackpot_line) = if reels[0] == reels[1] && reels[1] == reels[2] {
            let jackpot = reels[0] == Symbol::Diamond;
            (reels[0].full_match_multiplier(), jackpot)
        } else if let Some(symbol) = pair_symbol(&reels) {
            (symbol.pair_multiplier(), false)
        } else {
            // First lone payer in reel order, left to right.
            let lone = reels
                .iter()
                .map(Symbol::lone_multiplier)
                .find(|&multiplier| multiplier > 0)
                .unwrap_or(0);
            (lone, false)
        };

        let prize = bet.saturating_mul(multiplier);
        if jackpot_line {
            let credit = prize.saturating_add(pool);
            return SpinRound {
                reels,
                outcome: Outcome::Win(credit),
                jackpot: JackpotEvent::Paid(pool),
                narrative: format!("{line}\nJACKPOT! You won ${credit}!"),
            };
        }
        if prize > 0 {
            return SpinRound {
                reels,
                outcome: Outcome::Win(prize),
                jackpot: JackpotEvent::None,
                narrative: format!("{line}\nYou won ${prize}!"),
            };
        }

        // A paying combination that happens to multiply to zero (pair
        // of grapes or bananas) still skips the jackpot feed.
        let jackpot = if pair_symbol(&reels).is_some() {
            JackpotEvent::None
        } else {
            JackpotEvent::Contribute(bet.saturating_mul(JACKPOT_CONTRIBUTION_PCT) / 100)
        };
        SpinRound {
            reels,
            outcome: Outcome::Loss(bet),
            jackpot,
            narrative: format!("{line}\nYou lost ${bet}!"),
        }
    }
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// The symbol appearing exactly twice, if any.
fn pair_symbol(reels: &[Symbol; 3]) -> Option<Symbol> {
    if reels[0] == reels[1] && reels[1] == reels[2] {
        return None;
    }
    if reels[0] == reels[1] || reels[0] == reels[2] {
        Some(reels[0])
    } else if reels[1] == reels[2] {
        Some(reels[1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_pays_pair_multiplier() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Cherry, Symbol::Cherry, Symbol::Lemon], 50, 0);
        assert_eq!(round.outcome, Outcome::Win(750));
        assert_eq!(round.jackpot, JackpotEvent::None);
    }

    #[test]
    fn test_full_match_pays_full_multiplier() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Lemon; 3], 10, 500);
        assert_eq!(round.outcome, Outcome::Win(250));
        assert_eq!(round.jackpot, JackpotEvent::None);
    }

    #[test]
    fn test_diamond_line_pays_the_pool() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Diamond; 3], 10, 5_000);
        assert_eq!(round.outcome, Outcome::Win(6_000));
        assert_eq!(round.jackpot, JackpotEvent::Paid(5_000));
        assert!(round.narrative.contains("JACKPOT"));
    }

    #[test]
    fn test_first_lone_payer_in_reel_order_wins() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Diamond, Symbol::Cherry, Symbol::Banana], 10, 0);
        assert_eq!(round.outcome, Outcome::Win(60));

        // A cherry ahead of a diamond pays the cherry rate.
        let round = machine.resolve([Symbol::Cherry, Symbol::Diamond, Symbol::Banana], 10, 0);
        assert_eq!(round.outcome, Outcome::Win(20));

        let round = machine.resolve([Symbol::Banana, Symbol::Lemon, Symbol::Cherry], 10, 0);
        assert_eq!(round.outcome, Outcome::Win(20));
    }

    #[test]
    fn test_total_loss_feeds_the_jackpot() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Lemon, Symbol::Grapes, Symbol::Banana], 100, 0);
        assert_eq!(round.outcome, Outcome::Loss(100));
        assert_eq!(round.jackpot, JackpotEvent::Contribute(90));
    }

    #[test]
    fn test_zero_paying_pair_skips_the_jackpot() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Banana, Symbol::Banana, Symbol::Lemon], 100, 0);
        assert_eq!(round.outcome, Outcome::Loss(100));
        assert_eq!(round.jackpot, JackpotEvent::None);
    }

    #[test]
    fn test_rich_symbols_are_rarer() {
        let machine = SlotMachine::new();
        let mut rng = GameRng::seeded(42);
        let mut diamonds = 0usize;
        let mut bananas = 0usize;
        for _ in 0..5_000 {
            for symbol in machine.spin(&mut rng) {
                match symbol {
                    Symbol::Diamond => diamonds += 1,
                    Symbol::Banana => bananas += 1,
                    _ => {}
                }
            }
        }
        assert!(
            bananas > diamonds * 10,
            "bananas {bananas} should dwarf diamonds {diamonds}"
        );
    }

    #[test]
    fn test_reel_line_renders_emoji() {
        let machine = SlotMachine::new();
        let round = machine.resolve([Symbol::Diamond, Symbol::Cherry, Symbol::Lemon], 10, 0);
        assert!(round.narrative.contains('\u{1F48E}'));
        assert!(round.narrative.contains('\u{1F352}'));
    }
}
