//! Card and deck primitives shared by the card games.

use std::fmt;

use super::GameRng;

/// Card suits, in deck-construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Card ranks, deuce through ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Blackjack value. Aces count 11 here; the hand scorer demotes
    /// them to 1 as needed.
    pub fn blackjack_value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// Ace-high ordering value used by the poker evaluator (2-14).
    pub fn poker_value(&self) -> u8 {
        match self {
            Rank::Ace => 14,
            Rank::King => 13,
            Rank::Queen => 12,
            Rank::Jack => 11,
            other => other.blackjack_value(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            numeric => return write!(f, "{}", numeric.blackjack_value()),
        };
        f.write_str(label)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
            Suit::Spades => "\u{2660}",
        })
    }
}

/// An immutable (rank, suit) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Draw pool for the card games.
///
/// `decks` standard 52-card sets are concatenated into a shoe. Dealing
/// removes a uniformly random remaining card; an exhausted shoe is
/// silently rebuilt and reshuffled, so a deal never fails.
#[derive(Clone, Debug)]
pub struct Deck {
    decks: usize,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(decks: usize) -> Self {
        let decks = decks.max(1);
        Self {
            decks,
            cards: Self::build(decks),
        }
    }

    fn build(decks: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks * 52);
        for _ in 0..decks {
            for suit in SUITS {
                for rank in RANKS {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Remove and return one uniformly random card.
    pub fn deal(&mut self, rng: &mut GameRng) -> Card {
        if self.cards.is_empty() {
            self.cards = Self::build(self.decks);
            rng.shuffle(&mut self.cards);
        }
        let idx = rng.index(self.cards.len());
        self.cards.swap_remove(idx)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_deck_is_52_unique_cards() {
        let deck = Deck::new(1);
        assert_eq!(deck.remaining(), 52);
        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_shoe_replicates_the_deck() {
        let shoe = Deck::new(8);
        assert_eq!(shoe.remaining(), 8 * 52);
    }

    #[test]
    fn test_deal_consumes_cards() {
        let mut rng = GameRng::seeded(1);
        let mut deck = Deck::new(1);
        let mut seen = HashSet::new();
        for _ in 0..52 {
            assert!(seen.insert(deck.deal(&mut rng)));
        }
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_empty_deck_rebuilds_instead_of_failing() {
        let mut rng = GameRng::seeded(2);
        let mut deck = Deck::new(1);
        for _ in 0..52 {
            deck.deal(&mut rng);
        }
        // The 53rd deal comes from a rebuilt, reshuffled deck.
        deck.deal(&mut rng);
        assert_eq!(deck.remaining(), 51);
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(card.to_string(), "A\u{2660}");
        let card = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(card.to_string(), "10\u{2665}");
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::King.blackjack_value(), 10);
        assert_eq!(Rank::Ace.blackjack_value(), 11);
        assert_eq!(Rank::Ace.poker_value(), 14);
        assert_eq!(Rank::Two.poker_value(), 2);
    }
}
