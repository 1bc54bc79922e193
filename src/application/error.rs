use thiserror::Error;

use crate::domain::AccountNumber;

/// Errors a ledger operation can surface to its caller.
///
/// The domain taxonomy is exactly two kinds: a lookup that referenced an
/// absent account, and a caller-supplied value that violated a precondition.
/// Neither is ever retried or recovered inside the service. `Storage` carries
/// faults from the store collaborator itself (connection loss, constraint
/// violations) and is plumbing, not domain.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    NotFound(AccountNumber),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
