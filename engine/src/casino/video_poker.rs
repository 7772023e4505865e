//! Five-card draw video poker, Jacks or Better paytable.
//!
//! A session deals five cards from a single deck, lets the player lock
//! any subset, then redraws the rest exactly once. The final hand pays
//! a multiple of the stake; a pair below jacks pays nothing.

use parlor_types::{CasinoError, Outcome};

use super::cards::{Card, Deck, Rank};
use super::GameRng;

const HAND_SIZE: usize = 5;

/// Hand classes, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRank {
    HighCard,
    JacksOrBetter,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandRank {
    /// Stake multiplier paid for the hand.
    pub fn payout_multiplier(&self) -> u64 {
        match self {
            Self::RoyalFlush => 800,
            Self::StraightFlush => 50,
            Self::FourOfAKind => 25,
            Self::FullHouse => 9,
            Self::Flush => 6,
            Self::Straight => 4,
            Self::ThreeOfAKind => 3,
            Self::TwoPair => 2,
            Self::JacksOrBetter => 1,
            Self::HighCard => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::JacksOrBetter => "Jacks or Better",
            Self::HighCard => "High Card",
        }
    }
}

/// Classify a five-card hand.
pub fn evaluate_hand(cards: &[Card; HAND_SIZE]) -> HandRank {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.poker_value()).collect();
    values.sort_unstable();

    let flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let wheel = values == [2, 3, 4, 5, 14];
    let straight = wheel
        || values
            .windows(2)
            .all(|pair| pair[1] == pair[0] + 1);
    let royal = values == [10, 11, 12, 13, 14];

    if flush && royal {
        return HandRank::RoyalFlush;
    }
    if flush && straight {
        return HandRank::StraightFlush;
    }

    // Rank multiplicities, indexed by poker value (2..=14).
    let mut counts = [0u8; 15];
    for &value in &values {
        counts[usize::from(value)] += 1;
    }
    let mut pairs = 0;
    let mut high_pair = false;
    let mut triple = false;
    let mut quad = false;
    for (value, &count) in counts.iter().enumerate() {
        match count {
            4 => quad = true,
            3 => triple = true,
            2 => {
                pairs += 1;
                if value >= usize::from(Rank::Jack.poker_value()) {
                    high_pair = true;
                }
            }
            _ => {}
        }
    }

    if quad {
        HandRank::FourOfAKind
    } else if triple && pairs == 1 {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if triple {
        HandRank::ThreeOfAKind
    } else if pairs == 2 {
        HandRank::TwoPair
    } else if high_pair {
        HandRank::JacksOrBetter
    } else {
        HandRank::HighCard
    }
}

/// A resolved draw, ready for the ledger and the renderer.
#[derive(Clone, Debug)]
pub struct VideoPokerRound {
    pub outcome: Outcome,
    pub hand: [Card; HAND_SIZE],
    pub rank: HandRank,
    pub narrative: String,
}

/// One in-flight video poker round.
#[derive(Debug)]
pub struct VideoPokerSession {
    deck: Deck,
    pub hand: [Card; HAND_SIZE],
    pub locks: [bool; HAND_SIZE],
    pub bet: u64,
    drawn: bool,
}

impl VideoPokerSession {
    /// Deal the opening hand. The stake must already be debited.
    pub fn open(bet: u64, rng: &mut GameRng) -> Self {
        let mut deck = Deck::new(1);
        let hand = std::array::from_fn(|_| deck.deal(rng));
        Self {
            deck,
            hand,
            locks: [false; HAND_SIZE],
            bet,
            drawn: false,
        }
    }

    /// Flip the lock on one card. Rejected once the redraw has run.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, CasinoError> {
        if self.drawn || index >= HAND_SIZE {
            return Err(CasinoError::InvalidAction("lock"));
        }
        self.locks[index] = !self.locks[index];
        Ok(self.locks[index])
    }

    /// Replace every unlocked card, then score the hand. A session
    /// already drawn re-scores the same hand instead of drawing again,
    /// so a failed settlement can be replayed.
    pub fn redraw(&mut self, rng: &mut GameRng) -> VideoPokerRound {
        if !self.drawn {
            for (card, locked) in self.hand.iter_mut().zip(self.locks) {
                if !locked {
                    *card = self.deck.deal(rng);
                }
            }
            self.drawn = true;
        }

        let rank = evaluate_hand(&self.hand);
        let multiplier = rank.payout_multiplier();
        let cards = self
            .hand
            .iter()
            .map(|card| format!("[{card}]"))
            .collect::<Vec<_>>()
            .join(" ");
        let (outcome, verdict) = if multiplier > 0 {
            let credit = self.bet.saturating_mul(multiplier);
            (
                Outcome::Win(credit),
                format!("{}! You won ${credit}!", rank.label()),
            )
        } else {
            (
                Outcome::Loss(self.bet),
                format!("{}. You lost ${}!", rank.label(), self.bet),
            )
        };
        VideoPokerRound {
            outcome,
            hand: self.hand,
            rank,
            narrative: format!("{cards}\n{verdict}"),
        }
    }
}
