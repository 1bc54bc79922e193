use crate::domain::{format_cents, Account, AccountNumber, Cents};
use crate::storage::{AccountStore, SqliteStore};

use super::LedgerError;

/// Application service providing the account-ledger operations.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
///
/// Every mutating operation is a read-modify-write: fetch the current record,
/// compute the new balance here, write back only the scalar, and return the
/// locally-mutated record. Concurrent calls against the same account can
/// therefore race (classic lost update); the store provides no coordination
/// and none is layered on top.
pub struct LedgerService<S: AccountStore> {
    store: S,
}

impl<S: AccountStore> LedgerService<S> {
    /// Create a new ledger service around the given account store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new account with the caller-assigned number and opening
    /// balance. The opening balance must not be negative.
    ///
    /// No duplicate-number check happens here; what the store does with an
    /// already-used key is its own business.
    pub async fn create_account(&self, account: Account) -> Result<Account, LedgerError> {
        if account.balance < 0 {
            return Err(LedgerError::InvalidArgument(format!(
                "Initial balance cannot be negative (got {})",
                format_cents(account.balance)
            )));
        }
        self.store.create(&account).await?;
        Ok(account)
    }

    /// Add a positive amount to an account's balance.
    pub async fn deposit(
        &self,
        account_number: AccountNumber,
        amount: Cents,
    ) -> Result<Account, LedgerError> {
        Self::validate_amount(amount)?;
        let mut existing = self.get_existing(account_number).await?;
        let new_balance = existing.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::InvalidArgument(format!(
                "Deposit overflows balance: balance {}, amount {}",
                format_cents(existing.balance),
                format_cents(amount)
            ))
        })?;
        self.write_balance(account_number, new_balance).await?;
        existing.balance = new_balance;
        Ok(existing)
    }

    /// Remove a positive amount from an account's balance. The amount may
    /// equal the current balance (leaving zero) but never exceed it.
    pub async fn withdraw(
        &self,
        account_number: AccountNumber,
        amount: Cents,
    ) -> Result<Account, LedgerError> {
        Self::validate_amount(amount)?;
        let mut existing = self.get_existing(account_number).await?;
        if amount > existing.balance {
            return Err(LedgerError::InvalidArgument(format!(
                "Insufficient funds for withdrawal: balance {}, requested {}",
                format_cents(existing.balance),
                format_cents(amount)
            )));
        }
        let new_balance = existing.balance - amount;
        self.write_balance(account_number, new_balance).await?;
        existing.balance = new_balance;
        Ok(existing)
    }

    /// Overwrite an account's balance with an arbitrary value.
    ///
    /// Deliberately unvalidated: negative balances can be written here, even
    /// though `create_account` and `withdraw` refuse them. This is a direct
    /// correction tool, not a transaction.
    pub async fn update_balance(
        &self,
        account_number: AccountNumber,
        new_balance: Cents,
    ) -> Result<Account, LedgerError> {
        let mut existing = self.get_existing(account_number).await?;
        self.write_balance(account_number, new_balance).await?;
        existing.balance = new_balance;
        Ok(existing)
    }

    /// Fetch an account without modifying it.
    pub async fn view_account(&self, account_number: AccountNumber) -> Result<Account, LedgerError> {
        self.get_existing(account_number).await
    }

    /// Fetch just the balance of an account.
    pub async fn get_balance(&self, account_number: AccountNumber) -> Result<Cents, LedgerError> {
        self.store
            .get_balance(account_number)
            .await?
            .ok_or(LedgerError::NotFound(account_number))
    }

    async fn get_existing(&self, account_number: AccountNumber) -> Result<Account, LedgerError> {
        self.store
            .get_account(account_number)
            .await?
            .ok_or(LedgerError::NotFound(account_number))
    }

    async fn write_balance(
        &self,
        account_number: AccountNumber,
        new_balance: Cents,
    ) -> Result<(), LedgerError> {
        if !self.store.update_balance(account_number, new_balance).await? {
            // The record vanished between read and write; same condition as
            // a failed lookup.
            return Err(LedgerError::NotFound(account_number));
        }
        Ok(())
    }

    // Block zero/negative amounts before any store access, so an invalid
    // amount on a nonexistent account still reports InvalidArgument.
    fn validate_amount(amount: Cents) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidArgument(format!(
                "Amount must be positive (got {})",
                format_cents(amount)
            )));
        }
        Ok(())
    }
}

impl LedgerService<SqliteStore> {
    /// Initialize a new SQLite-backed service at the given path.
    pub async fn init(database_path: &str) -> Result<Self, LedgerError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let store = SqliteStore::init(&db_url).await?;
        Ok(Self::new(store))
    }

    /// Connect to an existing SQLite database.
    pub async fn connect(database_path: &str) -> Result<Self, LedgerError> {
        let db_url = format!("sqlite:{}", database_path);
        let store = SqliteStore::connect(&db_url).await?;
        Ok(Self::new(store))
    }
}
