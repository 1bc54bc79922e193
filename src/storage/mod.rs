mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{Account, AccountNumber, Cents};

/// SQL migration for initial schema
pub const MIGRATION_001_INITIAL: &str = include_str!("migrations/001_initial.sql");

/// Persistence contract for account records, keyed by account number.
///
/// This is the entire surface the ledger service depends on; any storage
/// technology satisfying it is interchangeable. Absence of a key is signalled
/// in-band (`None` on reads, `false` on updates) so the service can translate
/// it into a domain error; backend faults travel as `anyhow::Error`.
///
/// Implementations do no constraint checking of their own. In particular,
/// what happens when `create` is given an account number that already exists
/// is implementation-defined.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account record.
    async fn create(&self, account: &Account) -> Result<()>;

    /// Fetch an account by number. `None` if no record exists for that key.
    async fn get_account(&self, account_number: AccountNumber) -> Result<Option<Account>>;

    /// Convenience read of just the balance. `None` under the same condition
    /// as [`get_account`](AccountStore::get_account).
    async fn get_balance(&self, account_number: AccountNumber) -> Result<Option<Cents>>;

    /// Overwrite the balance of an existing record. Returns `false` if the
    /// key does not exist; never inserts.
    async fn update_balance(
        &self,
        account_number: AccountNumber,
        new_balance: Cents,
    ) -> Result<bool>;
}
