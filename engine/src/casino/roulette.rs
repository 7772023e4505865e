//! Single-zero roulette.
//!
//! The wheel spins 0..=36. Bets are placed on categories of numbers;
//! zero belongs to the green category alone and defeats every other
//! bet. A win credits the stake times one plus the category's payout
//! multiplier.

use parlor_types::Outcome;
use std::fmt;

use super::GameRng;

/// Red pockets on a European wheel.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

pub fn is_black(number: u8) -> bool {
    number != 0 && !is_red(number)
}

/// Named groups of pockets a bet can cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetCategory {
    Red,
    Black,
    Green,
    Even,
    Odd,
    Low,
    High,
    FirstDozen,
    SecondDozen,
    ThirdDozen,
    FirstRow,
    SecondRow,
    ThirdRow,
}

impl BetCategory {
    /// Whether this category covers the spun pocket. Zero is covered
    /// by green only.
    pub fn covers(&self, number: u8) -> bool {
        if number == 0 {
            return *self == Self::Green;
        }
        match self {
            Self::Red => is_red(number),
            Self::Black => is_black(number),
            Self::Green => false,
            Self::Even => number % 2 == 0,
            Self::Odd => number % 2 == 1,
            Self::Low => number <= 18,
            Self::High => number >= 19,
            Self::FirstDozen => number <= 12,
            Self::SecondDozen => (13..=24).contains(&number),
            Self::ThirdDozen => number >= 25,
            Self::FirstRow => number % 3 == 0,
            Self::SecondRow => number % 3 == 1,
            Self::ThirdRow => number % 3 == 2,
        }
    }

    /// Profit multiplier: a winning bet pays `bet * multiplier` on top
    /// of the returned stake.
    pub fn payout_multiplier(&self) -> u64 {
        match self {
            Self::Green => 35,
            Self::FirstRow | Self::SecondRow | Self::ThirdRow => 3,
            Self::FirstDozen | Self::SecondDozen | Self::ThirdDozen => 2,
            Self::Red | Self::Black | Self::Even | Self::Odd | Self::Low | Self::High => 1,
        }
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Green => "green",
            Self::Even => "even",
            Self::Odd => "odd",
            Self::Low => "1-18",
            Self::High => "19-36",
            Self::FirstDozen => "1st dozen",
            Self::SecondDozen => "2nd dozen",
            Self::ThirdDozen => "3rd dozen",
            Self::FirstRow => "1st row",
            Self::SecondRow => "2nd row",
            Self::ThirdRow => "3rd row",
        };
        f.write_str(name)
    }
}

/// A resolved spin, ready for the ledger and the renderer.
#[derive(Clone, Debug)]
pub struct RouletteRound {
    pub number: u8,
    pub category: BetCategory,
    pub outcome: Outcome,
    pub narrative: String,
}

/// Score a bet against an already-spun pocket.
pub fn resolve(number: u8, bet: u64, category: BetCategory) -> RouletteRound {
    let color = if number == 0 {
        "green"
    } else if is_red(number) {
        "red"
    } else {
        "black"
    };
    let (outcome, verdict) = if category.covers(number) {
        let credit = bet.saturating_mul(1 + category.payout_multiplier());
        (Outcome::Win(credit), format!("You won ${}!", credit - bet))
    } else {
        (Outcome::Loss(bet), format!("You lost ${bet}!"))
    };
    RouletteRound {
        number,
        category,
        outcome,
        narrative: format!("The ball landed on {number} ({color})!\n{verdict}"),
    }
}

/// Spin the wheel and score the bet.
pub fn play(bet: u64, category: BetCategory, rng: &mut GameRng) -> RouletteRound {
    resolve(rng.wheel_number(), bet, category)
}
