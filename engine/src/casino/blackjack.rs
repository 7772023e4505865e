//! Blackjack engine.
//!
//! One session per player: an eight-deck shoe plus the player's and the
//! dealer's hands. The dealer hits below 17 and stands on all 17s; a
//! win returns twice the stake and a tie returns it. Resolution never
//! mutates the dealer's stored hand, so a round whose settlement failed
//! can be replayed by the caller without corrupting the session.

use parlor_types::constants::{DEALER_STAND, SHOE_DECKS};
use parlor_types::{CasinoError, Outcome};

use super::cards::{Card, Deck, Rank};
use super::GameRng;

/// Value of a hand with aces demoted from 11 to 1 one at a time while
/// the total exceeds 21.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;
    for card in cards {
        value += u16::from(card.rank.blackjack_value());
        if card.rank == Rank::Ace {
            aces += 1;
        }
    }
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }
    value.min(u16::from(u8::MAX)) as u8
}

pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// Render a hand as `[A♠] [K♥] ...`.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("[{card}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A resolved round, ready for the ledger and the renderer.
#[derive(Clone, Debug)]
pub struct BlackjackRound {
    pub outcome: Outcome,
    /// Final stake (doubled when the round was doubled down).
    pub bet: u64,
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub narrative: String,
}

/// One in-flight blackjack round.
#[derive(Debug)]
pub struct BlackjackSession {
    shoe: Deck,
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub bet: u64,
}

impl BlackjackSession {
    /// Deal the opening hands. The stake must already be debited.
    pub fn open(bet: u64, rng: &mut GameRng) -> Self {
        let mut shoe = Deck::new(SHOE_DECKS);
        let player = vec![shoe.deal(rng), shoe.deal(rng)];
        let dealer = vec![shoe.deal(rng), shoe.deal(rng)];
        Self {
            shoe,
            player,
            dealer,
            bet,
        }
    }

    /// Deal one card to the player. `Some` when the hand busts and the
    /// round resolves as a loss; `None` while play continues. An
    /// already-busted hand re-emits its loss without dealing again.
    pub fn hit(&mut self, rng: &mut GameRng) -> Option<BlackjackRound> {
        if !is_bust(&self.player) {
            let card = self.shoe.deal(rng);
            self.player.push(card);
        }
        if is_bust(&self.player) {
            Some(self.bust_round())
        } else {
            None
        }
    }

    /// Run the dealer out and compare hands.
    pub fn stand(&mut self, rng: &mut GameRng) -> BlackjackRound {
        let dealer = self.dealer_play(rng);
        self.resolve(dealer)
    }

    /// Double down: the caller must have debited the extra stake
    /// already. Doubles the bet, deals exactly one card, then runs the
    /// dealer out. Only valid on a two-card hand.
    pub fn double(&mut self, rng: &mut GameRng) -> Result<BlackjackRound, CasinoError> {
        if self.player.len() != 2 {
            return Err(CasinoError::InvalidAction("double"));
        }
        self.bet = self.bet.saturating_mul(2);
        let card = self.shoe.deal(rng);
        self.player.push(card);
        if is_bust(&self.player) {
            return Ok(self.bust_round());
        }
        Ok(self.stand(rng))
    }

    pub fn can_double(&self) -> bool {
        self.player.len() == 2
    }

    /// Dealer hand with the hole card hidden while the round is live.
    pub fn dealer_display(&self, force_reveal: bool) -> String {
        if self.dealer.len() == 2 && !force_reveal {
            let up = self.dealer[0];
            return format!("[{up}] [?{}]", up.suit);
        }
        format_hand(&self.dealer)
    }

    /// Dealer draws on a copy of the stored hand, hitting below 17.
    /// The stored hand is left untouched so a failed settlement can be
    /// replayed.
    fn dealer_play(&mut self, rng: &mut GameRng) -> Vec<Card> {
        let mut hand = self.dealer.clone();
        while hand_value(&hand) < DEALER_STAND {
            hand.push(self.shoe.deal(rng));
        }
        hand
    }

    fn bust_round(&self) -> BlackjackRound {
        let (outcome, verdict) = resolve_hands(&self.player, &self.dealer, self.bet);
        BlackjackRound {
            outcome,
            bet: self.bet,
            player: self.player.clone(),
            dealer: self.dealer.clone(),
            narrative: format!(
                "Your hand: {} => {}\n{verdict}",
                format_hand(&self.player),
                hand_value(&self.player),
            ),
        }
    }

    fn resolve(&self, dealer: Vec<Card>) -> BlackjackRound {
        let (outcome, verdict) = resolve_hands(&self.player, &dealer, self.bet);
        let mut narrative = String::new();
        for card in &dealer[self.dealer.len()..] {
            narrative.push_str(&format!("Dealer got {card}\n"));
        }
        narrative.push_str(&format!(
            "Your hand: {} => {}\nDealer's hand: {} => {}\n{verdict}",
            format_hand(&self.player),
            hand_value(&self.player),
            format_hand(&dealer),
            hand_value(&dealer),
        ));
        BlackjackRound {
            outcome,
            bet: self.bet,
            player: self.player.clone(),
            dealer,
            narrative,
        }
    }
}

/// Compare final hands and produce the outcome plus a verdict line.
pub fn resolve_hands(player: &[Card], dealer: &[Card], bet: u64) -> (Outcome, String) {
    let player_value = hand_value(player);
    let dealer_value = hand_value(dealer);

    if player_value > 21 {
        return (Outcome::Loss(bet), format!("You bust! You lost ${bet}!"));
    }
    if dealer_value > 21 {
        return (
            Outcome::Win(bet.saturating_mul(2)),
            format!("The dealer busts! You won ${bet}!"),
        );
    }
    if player_value > dealer_value {
        (
            Outcome::Win(bet.saturating_mul(2)),
            format!("You win! You won ${bet}!"),
        )
    } else if player_value < dealer_value {
        (
            Outcome::Loss(bet),
            format!("The dealer wins! You lost ${bet}!"),
        )
    } else {
        (
            Outcome::Tie(bet),
            "It's a tie! You get your bet back!".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::cards::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_hand_value_soft_aces() {
        // One ace stays 11, the other demotes to 1.
        assert_eq!(hand_value(&[card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]), 21);
        assert_eq!(hand_value(&[card(Rank::King), card(Rank::Queen)]), 20);
        // 11 + 10 + 5 = 26 > 21, so the ace demotes: 1 + 10 + 5 = 16.
        assert_eq!(hand_value(&[card(Rank::Ace), card(Rank::King), card(Rank::Five)]), 16);
    }

    #[test]
    fn test_hand_value_all_aces() {
        assert_eq!(hand_value(&[card(Rank::Ace), card(Rank::Ace)]), 12);
        let four_aces = vec![card(Rank::Ace); 4];
        assert_eq!(hand_value(&four_aces), 14);
    }

    #[test]
    fn test_bust_iff_value_over_21() {
        let hands: [&[Card]; 4] = [
            &[card(Rank::King), card(Rank::Queen), card(Rank::Two)],
            &[card(Rank::Ace), card(Rank::King), card(Rank::Queen)],
            &[card(Rank::Ten), card(Rank::Nine), card(Rank::Three)],
            &[card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)],
        ];
        for hand in hands {
            assert_eq!(is_bust(hand), hand_value(hand) > 21);
        }
    }

    #[test]
    fn test_resolve_hands_matrix() {
        let twenty = [card(Rank::King), card(Rank::Queen)];
        let nineteen = [card(Rank::King), card(Rank::Nine)];
        let bust = [card(Rank::King), card(Rank::Queen), card(Rank::Five)];

        let (outcome, _) = resolve_hands(&twenty, &nineteen, 100);
        assert_eq!(outcome, Outcome::Win(200));

        let (outcome, _) = resolve_hands(&nineteen, &twenty, 100);
        assert_eq!(outcome, Outcome::Loss(100));

        let (outcome, _) = resolve_hands(&twenty, &twenty, 100);
        assert_eq!(outcome, Outcome::Tie(100));

        let (outcome, _) = resolve_hands(&nineteen, &bust, 100);
        assert_eq!(outcome, Outcome::Win(200));

        // A busted player loses even against a busted dealer.
        let (outcome, _) = resolve_hands(&bust, &bust, 100);
        assert_eq!(outcome, Outcome::Loss(100));
    }

    #[test]
    fn test_open_deals_two_cards_each() {
        let mut rng = GameRng::seeded(5);
        let session = BlackjackSession::open(100, &mut rng);
        assert_eq!(session.player.len(), 2);
        assert_eq!(session.dealer.len(), 2);
        assert_eq!(session.bet, 100);
    }

    #[test]
    fn test_dealer_stands_at_17_or_busts() {
        for seed in 0..50 {
            let mut rng = GameRng::seeded(seed);
            let mut session = BlackjackSession::open(10, &mut rng);
            let round = session.stand(&mut rng);
            let dealer_value = hand_value(&round.dealer);
            assert!(
                dealer_value >= DEALER_STAND,
                "dealer stopped at {dealer_value} (seed {seed})"
            );
        }
    }

    #[test]
    fn test_hit_until_resolution() {
        let mut rng = GameRng::seeded(11);
        let mut session = BlackjackSession::open(10, &mut rng);
        let mut rounds = 0;
        while session.hit(&mut rng).is_none() {
            rounds += 1;
            assert!(rounds < 22, "hitting forever without busting");
        }
        assert!(is_bust(&session.player));
    }

    #[test]
    fn test_busted_hit_replays_without_dealing() {
        let mut rng = GameRng::seeded(11);
        let mut session = BlackjackSession::open(10, &mut rng);
        while session.hit(&mut rng).is_none() {}
        let cards = session.player.len();
        let round = session.hit(&mut rng).expect("busted hand stays busted");
        assert_eq!(session.player.len(), cards);
        assert_eq!(round.outcome, Outcome::Loss(10));
    }

    #[test]
    fn test_double_requires_two_cards() {
        let mut rng = GameRng::seeded(13);
        let mut session = BlackjackSession::open(10, &mut rng);
        session.player.push(card(Rank::Two));
        assert_eq!(
            session.double(&mut rng).unwrap_err(),
            CasinoError::InvalidAction("double")
        );
    }

    #[test]
    fn test_double_doubles_the_stake() {
        let mut rng = GameRng::seeded(17);
        let mut session = BlackjackSession::open(50, &mut rng);
        let round = session.double(&mut rng).expect("two-card hand doubles");
        assert_eq!(round.bet, 100);
        assert_eq!(session.player.len(), 3);
        match round.outcome {
            Outcome::Win(credit) => assert_eq!(credit, 200),
            Outcome::Loss(stake) | Outcome::Tie(stake) => assert_eq!(stake, 100),
        }
    }

    #[test]
    fn test_session_formats_for_diagnostics() {
        let mut rng = GameRng::seeded(19);
        let session = BlackjackSession::open(10, &mut rng);
        let dump = format!("{session:?}");
        assert!(dump.contains("bet: 10"));
    }

    #[test]
    fn test_dealer_hole_card_is_hidden() {
        let mut rng = GameRng::seeded(19);
        let session = BlackjackSession::open(10, &mut rng);
        let hidden = session.dealer_display(false);
        assert!(hidden.contains('?'));
        let revealed = session.dealer_display(true);
        assert!(!revealed.contains('?'));
    }

    #[test]
    fn test_stand_does_not_mutate_stored_dealer_hand() {
        let mut rng = GameRng::seeded(23);
        let mut session = BlackjackSession::open(10, &mut rng);
        let before = session.dealer.clone();
        let _ = session.stand(&mut rng);
        assert_eq!(session.dealer, before);
    }
}
