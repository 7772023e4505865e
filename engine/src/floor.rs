//! The casino floor: one façade over the games, the ledger, and the
//! per-player sessions.
//!
//! Stakes are debited when a round opens and credited when it settles.
//! A settlement that fails to persist leaves the session in place, so
//! the same action can be retried without re-rolling the result the
//! player already earned.

use parlor_types::{Account, CasinoError, Game, Outcome, PlayerId};
use std::collections::HashMap;
use tracing::info;

use crate::casino::blackjack::{BlackjackRound, BlackjackSession};
use crate::casino::dig_trash::{self, DigRound};
use crate::casino::roulette::{self, BetCategory, RouletteRound};
use crate::casino::slots::{JackpotEvent, SlotMachine, SpinRound};
use crate::casino::video_poker::{VideoPokerRound, VideoPokerSession};
use crate::casino::GameRng;
use crate::ledger::Ledger;
use crate::state::Store;

/// A settled round paired with the account as persisted.
#[derive(Clone, Debug)]
pub struct Settled<R> {
    pub round: R,
    pub account: Account,
}

pub struct Floor<S: Store> {
    ledger: Ledger<S>,
    rng: GameRng,
    slots: SlotMachine,
    blackjack: HashMap<PlayerId, BlackjackSession>,
    poker: HashMap<PlayerId, VideoPokerSession>,
}

impl<S: Store> Floor<S> {
    pub fn new(store: S) -> Self {
        Self::with_rng(store, GameRng::from_entropy())
    }

    /// Seedable constructor for deterministic play.
    pub fn with_rng(store: S, rng: GameRng) -> Self {
        Self {
            ledger: Ledger::new(store),
            rng,
            slots: SlotMachine::new(),
            blackjack: HashMap::new(),
            poker: HashMap::new(),
        }
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.ledger.store_mut()
    }

    pub async fn account(&mut self, player: PlayerId) -> Result<Account, CasinoError> {
        self.ledger.account(player).await
    }

    pub async fn jackpot(&self) -> Result<u64, CasinoError> {
        self.ledger.jackpot().await
    }

    pub async fn reset_jackpot(&mut self) -> Result<(), CasinoError> {
        self.ledger.reset_jackpot().await
    }

    // --- blackjack ---

    /// Open a blackjack round: debit the stake and deal. One round per
    /// player at a time.
    pub async fn blackjack_start(
        &mut self,
        player: PlayerId,
        bet: u64,
    ) -> Result<&BlackjackSession, CasinoError> {
        if self.blackjack.contains_key(&player) {
            return Err(CasinoError::InvalidAction("deal"));
        }
        self.ledger.place_bet(player, bet).await?;
        let session = BlackjackSession::open(bet, &mut self.rng);
        info!(player, bet, "blackjack round opened");
        Ok(self.blackjack.entry(player).or_insert(session))
    }

    /// Deal one card to the player. `Some` when the hand busts and the
    /// round settles.
    pub async fn blackjack_hit(
        &mut self,
        player: PlayerId,
    ) -> Result<Option<Settled<BlackjackRound>>, CasinoError> {
        let session = self
            .blackjack
            .get_mut(&player)
            .ok_or(CasinoError::InvalidAction("hit"))?;
        match session.hit(&mut self.rng) {
            Some(round) => self.settle_blackjack(player, round).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn blackjack_stand(
        &mut self,
        player: PlayerId,
    ) -> Result<Settled<BlackjackRound>, CasinoError> {
        let session = self
            .blackjack
            .get_mut(&player)
            .ok_or(CasinoError::InvalidAction("stand"))?;
        let round = session.stand(&mut self.rng);
        self.settle_blackjack(player, round).await
    }

    /// Double down: debit a second stake, deal exactly one card, then
    /// run out the dealer.
    pub async fn blackjack_double(
        &mut self,
        player: PlayerId,
    ) -> Result<Settled<BlackjackRound>, CasinoError> {
        let bet = match self.blackjack.get(&player) {
            Some(session) if session.can_double() => session.bet,
            Some(_) => return Err(CasinoError::InvalidAction("double")),
            None => return Err(CasinoError::InvalidAction("double")),
        };
        self.ledger.place_bet(player, bet).await?;
        let session = self
            .blackjack
            .get_mut(&player)
            .ok_or(CasinoError::InvalidAction("double"))?;
        let round = session.double(&mut self.rng)?;
        self.settle_blackjack(player, round).await
    }

    pub fn blackjack_session(&self, player: PlayerId) -> Option<&BlackjackSession> {
        self.blackjack.get(&player)
    }

    async fn settle_blackjack(
        &mut self,
        player: PlayerId,
        round: BlackjackRound,
    ) -> Result<Settled<BlackjackRound>, CasinoError> {
        let account = self
            .ledger
            .settle(player, Game::Blackjack, round.bet, round.outcome)
            .await?;
        self.blackjack.remove(&player);
        Ok(Settled { round, account })
    }

    // --- video poker ---

    pub async fn poker_start(
        &mut self,
        player: PlayerId,
        bet: u64,
    ) -> Result<&VideoPokerSession, CasinoError> {
        if self.poker.contains_key(&player) {
            return Err(CasinoError::InvalidAction("deal"));
        }
        self.ledger.place_bet(player, bet).await?;
        let session = VideoPokerSession::open(bet, &mut self.rng);
        info!(player, bet, "video poker round opened");
        Ok(self.poker.entry(player).or_insert(session))
    }

    /// Flip the lock on one of the five cards; returns its new state.
    pub fn poker_toggle_lock(
        &mut self,
        player: PlayerId,
        index: usize,
    ) -> Result<bool, CasinoError> {
        self.poker
            .get_mut(&player)
            .ok_or(CasinoError::InvalidAction("lock"))?
            .toggle_lock(index)
    }

    pub async fn poker_redraw(
        &mut self,
        player: PlayerId,
    ) -> Result<Settled<VideoPokerRound>, CasinoError> {
        let session = self
            .poker
            .get_mut(&player)
            .ok_or(CasinoError::InvalidAction("draw"))?;
        let bet = session.bet;
        let round = session.redraw(&mut self.rng);
        let account = self
            .ledger
            .settle(player, Game::VideoPoker, bet, round.outcome)
            .await?;
        self.poker.remove(&player);
        Ok(Settled { round, account })
    }

    pub fn poker_session(&self, player: PlayerId) -> Option<&VideoPokerSession> {
        self.poker.get(&player)
    }

    // --- single-action games ---

    /// One slot spin, start to finish: debit, spin, adjust the
    /// jackpot pool, settle.
    pub async fn slots_spin(
        &mut self,
        player: PlayerId,
        bet: u64,
    ) -> Result<Settled<SpinRound>, CasinoError> {
        self.ledger.place_bet(player, bet).await?;
        let pool = self.ledger.jackpot().await?;
        let reels = self.slots.spin(&mut self.rng);
        let round = self.slots.resolve(reels, bet, pool);
        match round.jackpot {
            JackpotEvent::Contribute(amount) => self.ledger.add_jackpot(amount).await?,
            JackpotEvent::Paid(amount) => info!(player, amount, "jackpot paid"),
            JackpotEvent::None => {}
        }
        let account = self
            .ledger
            .settle(player, Game::Slots, bet, round.outcome)
            .await?;
        Ok(Settled { round, account })
    }

    pub async fn roulette_play(
        &mut self,
        player: PlayerId,
        bet: u64,
        category: BetCategory,
    ) -> Result<Settled<RouletteRound>, CasinoError> {
        self.ledger.place_bet(player, bet).await?;
        let round = roulette::play(bet, category, &mut self.rng);
        let account = self
            .ledger
            .settle(player, Game::Roulette, bet, round.outcome)
            .await?;
        Ok(Settled { round, account })
    }

    /// Free dig through the trash; a find settles as a zero-stake win.
    pub async fn dig_trash(&mut self, player: PlayerId) -> Result<Settled<DigRound>, CasinoError> {
        let round = dig_trash::dig(&mut self.rng);
        let account = match round.prize {
            Some(prize) => {
                self.ledger
                    .settle(player, Game::DigTrash, 0, Outcome::Win(prize))
                    .await?
            }
            None => self.ledger.account(player).await?,
        };
        Ok(Settled { round, account })
    }
}
