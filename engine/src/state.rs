//! Persistence seam for accounts and the shared jackpot pool.

use parlor_types::{Account, PlayerId, StoreError};
use std::collections::HashMap;
use std::future::Future;

/// Backing store for player accounts and the progressive jackpot.
///
/// Every operation is fallible: callers treat a [`StoreError`] as a
/// transient persistence failure and leave game state untouched so the
/// action can be retried.
pub trait Store {
    fn load_account(
        &self,
        id: PlayerId,
    ) -> impl Future<Output = Result<Option<Account>, StoreError>>;

    fn save_account(&mut self, account: &Account) -> impl Future<Output = Result<(), StoreError>>;

    fn jackpot(&self) -> impl Future<Output = Result<u64, StoreError>>;

    fn add_jackpot(&mut self, amount: u64) -> impl Future<Output = Result<(), StoreError>>;

    fn reset_jackpot(&mut self) -> impl Future<Output = Result<(), StoreError>>;
}

/// In-memory store, the default for tests and single-process use.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    accounts: HashMap<PlayerId, Account>,
    jackpot: u64,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for Memory {
    async fn load_account(&self, id: PlayerId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(&id).cloned())
    }

    async fn save_account(&mut self, account: &Account) -> Result<(), StoreError> {
        self.accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn jackpot(&self) -> Result<u64, StoreError> {
        Ok(self.jackpot)
    }

    async fn add_jackpot(&mut self, amount: u64) -> Result<(), StoreError> {
        self.jackpot = self.jackpot.saturating_add(amount);
        Ok(())
    }

    async fn reset_jackpot(&mut self) -> Result<(), StoreError> {
        self.jackpot = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_account_loads_as_none() {
        let store = Memory::new();
        assert_eq!(store.load_account(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let mut store = Memory::new();
        let mut account = Account::new(7);
        account.balance = 123;
        store.save_account(&account).await.unwrap();
        assert_eq!(store.load_account(7).await.unwrap(), Some(account));
    }

    #[tokio::test]
    async fn test_jackpot_accumulates_and_resets() {
        let mut store = Memory::new();
        assert_eq!(store.jackpot().await.unwrap(), 0);
        store.add_jackpot(90).await.unwrap();
        store.add_jackpot(45).await.unwrap();
        assert_eq!(store.jackpot().await.unwrap(), 135);
        store.reset_jackpot().await.unwrap();
        assert_eq!(store.jackpot().await.unwrap(), 0);
    }
}
