//! Test doubles for the persistence seam.

use parlor_types::{Account, PlayerId, StoreError};

use crate::state::{Memory, Store};

/// A [`Memory`] store whose writes can be made to fail on demand.
/// Reads always succeed, mirroring a database that has lost its write
/// quorum but still serves queries.
#[derive(Clone, Debug, Default)]
pub struct FailingStore {
    inner: Memory,
    fail_writes: bool,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn write_error(&self) -> Result<(), StoreError> {
        if self.fail_writes {
            Err(StoreError::new("writes disabled"))
        } else {
            Ok(())
        }
    }
}

impl Store for FailingStore {
    async fn load_account(&self, id: PlayerId) -> Result<Option<Account>, StoreError> {
        self.inner.load_account(id).await
    }

    async fn save_account(&mut self, account: &Account) -> Result<(), StoreError> {
        self.write_error()?;
        self.inner.save_account(account).await
    }

    async fn jackpot(&self) -> Result<u64, StoreError> {
        self.inner.jackpot().await
    }

    async fn add_jackpot(&mut self, amount: u64) -> Result<(), StoreError> {
        self.write_error()?;
        self.inner.add_jackpot(amount).await
    }

    async fn reset_jackpot(&mut self) -> Result<(), StoreError> {
        self.write_error()?;
        self.inner.reset_jackpot().await
    }
}
