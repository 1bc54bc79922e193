use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::domain::{Account, AccountNumber, Cents};

use super::{AccountStore, MIGRATION_001_INITIAL};

/// SQLite-backed implementation of [`AccountStore`].
///
/// The `accounts` table keys on the caller-assigned account number, so
/// `create` with a duplicate number is rejected by the PRIMARY KEY constraint
/// and surfaces as a backend error.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new store around an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    fn row_to_account(row: &sqlx::sqlite::SqliteRow) -> Account {
        Account {
            account_number: row.get("account_number"),
            customer_name: row.get("customer_name"),
            balance: row.get("balance"),
        }
    }
}

#[async_trait]
impl AccountStore for SqliteStore {
    async fn create(&self, account: &Account) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (account_number, customer_name, balance)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(account.account_number)
        .bind(&account.customer_name)
        .bind(account.balance)
        .execute(&self.pool)
        .await
        .context("Failed to create account")?;
        Ok(())
    }

    async fn get_account(&self, account_number: AccountNumber) -> Result<Option<Account>> {
        let row = sqlx::query(
            r#"
            SELECT account_number, customer_name, balance
            FROM accounts
            WHERE account_number = ?
            "#,
        )
        .bind(account_number)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch account")?;

        Ok(row.as_ref().map(Self::row_to_account))
    }

    async fn get_balance(&self, account_number: AccountNumber) -> Result<Option<Cents>> {
        let row = sqlx::query("SELECT balance FROM accounts WHERE account_number = ?")
            .bind(account_number)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch balance")?;

        Ok(row.map(|r| r.get("balance")))
    }

    async fn update_balance(
        &self,
        account_number: AccountNumber,
        new_balance: Cents,
    ) -> Result<bool> {
        let result = sqlx::query("UPDATE accounts SET balance = ? WHERE account_number = ?")
            .bind(new_balance)
            .bind(account_number)
            .execute(&self.pool)
            .await
            .context("Failed to update balance")?;

        // Zero rows touched means the key does not exist; no upsert.
        Ok(result.rows_affected() > 0)
    }
}
