//! Account ledger: every chip that moves goes through here.
//!
//! The ledger re-fetches the account before each mutation so that
//! concurrent settlements observe each other's writes, then persists
//! the updated row. Balance arithmetic saturates; overflow cannot mint
//! or burn chips.

use parlor_types::{Account, CasinoError, Game, Outcome, PlayerId};
use tracing::debug;

use crate::state::Store;

pub struct Ledger<S: Store> {
    store: S,
}

impl<S: Store> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Fetch the player's account, creating it with the starting
    /// balance on first sight.
    pub async fn account(&mut self, id: PlayerId) -> Result<Account, CasinoError> {
        if let Some(account) = self.store.load_account(id).await? {
            return Ok(account);
        }
        let account = Account::new(id);
        self.store.save_account(&account).await?;
        debug!(player = id, balance = account.balance, "account created");
        Ok(account)
    }

    /// Debit the stake up front. Rejects a zero stake and a stake the
    /// balance cannot cover; on success the debited account is already
    /// persisted.
    pub async fn place_bet(&mut self, id: PlayerId, stake: u64) -> Result<Account, CasinoError> {
        if stake == 0 {
            return Err(CasinoError::InvalidBet);
        }
        let mut account = self.account(id).await?;
        if account.balance < stake {
            return Err(CasinoError::InsufficientFunds {
                have: account.balance,
                need: stake,
            });
        }
        account.balance -= stake;
        self.store.save_account(&account).await?;
        debug!(player = id, stake, balance = account.balance, "bet placed");
        Ok(account)
    }

    /// Apply a resolved round to the account. `stake` is the amount
    /// the player put at risk (already debited); a win credits the
    /// outcome's full return and books the profit, a tie returns the
    /// stake, a loss books the forfeited amount.
    pub async fn settle(
        &mut self,
        id: PlayerId,
        game: Game,
        stake: u64,
        outcome: Outcome,
    ) -> Result<Account, CasinoError> {
        let mut account = self.account(id).await?;
        match outcome {
            Outcome::Win(credit) => {
                account.balance = account.balance.saturating_add(credit);
                account.money_won = account
                    .money_won
                    .saturating_add(credit.saturating_sub(stake));
                let wins = match game {
                    Game::Slots => &mut account.slot_wins,
                    Game::Blackjack => &mut account.blackjack_wins,
                    Game::Roulette => &mut account.roulette_wins,
                    Game::VideoPoker => &mut account.video_poker_wins,
                    Game::DigTrash => &mut account.dig_trash_wins,
                };
                *wins += 1;
            }
            Outcome::Tie(returned) => {
                account.balance = account.balance.saturating_add(returned);
            }
            Outcome::Loss(lost) => {
                account.money_lost = account.money_lost.saturating_add(lost);
            }
        }
        self.store.save_account(&account).await?;
        debug!(
            player = id,
            ?game,
            ?outcome,
            balance = account.balance,
            "round settled"
        );
        Ok(account)
    }

    pub async fn jackpot(&self) -> Result<u64, CasinoError> {
        Ok(self.store.jackpot().await?)
    }

    pub async fn add_jackpot(&mut self, amount: u64) -> Result<(), CasinoError> {
        Ok(self.store.add_jackpot(amount).await?)
    }

    pub async fn reset_jackpot(&mut self) -> Result<(), CasinoError> {
        Ok(self.store.reset_jackpot().await?)
    }
}
