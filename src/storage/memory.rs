use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::domain::{Account, AccountNumber, Cents};

use super::AccountStore;

/// In-memory reference implementation of [`AccountStore`].
///
/// Backs tests and any caller that doesn't need durability. `create` on an
/// already-used account number overwrites the existing record (plain map
/// insert semantics).
#[derive(Default)]
pub struct MemoryStore {
    accounts: Mutex<HashMap<AccountNumber, Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<AccountNumber, Account>>> {
        self.accounts
            .lock()
            .map_err(|_| anyhow!("account map lock poisoned"))
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create(&self, account: &Account) -> Result<()> {
        self.lock()?.insert(account.account_number, account.clone());
        Ok(())
    }

    async fn get_account(&self, account_number: AccountNumber) -> Result<Option<Account>> {
        Ok(self.lock()?.get(&account_number).cloned())
    }

    async fn get_balance(&self, account_number: AccountNumber) -> Result<Option<Cents>> {
        Ok(self.lock()?.get(&account_number).map(|a| a.balance))
    }

    async fn update_balance(
        &self,
        account_number: AccountNumber,
        new_balance: Cents,
    ) -> Result<bool> {
        match self.lock()?.get_mut(&account_number) {
            Some(account) => {
                account.balance = new_balance;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() -> Result<()> {
        let store = MemoryStore::new();
        assert!(store.get_account(1).await?.is_none());
        assert!(store.get_balance(1).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_balance_never_inserts() -> Result<()> {
        let store = MemoryStore::new();
        assert!(!store.update_balance(1, 500).await?);
        assert!(store.get_account(1).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_then_read_back() -> Result<()> {
        let store = MemoryStore::new();
        store.create(&Account::new(1, "Alice", 10000)).await?;

        let account = store.get_account(1).await?.unwrap();
        assert_eq!(account.customer_name, "Alice");
        assert_eq!(store.get_balance(1).await?, Some(10000));

        assert!(store.update_balance(1, 2500).await?);
        assert_eq!(store.get_balance(1).await?, Some(2500));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_create_overwrites() -> Result<()> {
        let store = MemoryStore::new();
        store.create(&Account::new(1, "Alice", 10000)).await?;
        store.create(&Account::new(1, "Mallory", 1)).await?;

        let account = store.get_account(1).await?.unwrap();
        assert_eq!(account.customer_name, "Mallory");
        assert_eq!(account.balance, 1);
        Ok(())
    }
}
