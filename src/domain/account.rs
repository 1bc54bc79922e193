use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Cents;

/// Caller-assigned unique integer key identifying one ledger record.
pub type AccountNumber = i64;

/// A single ledger record: one customer, one mutable balance.
///
/// The account number is assigned by the caller at creation and never changes.
/// The balance is mutated only through the ledger service operations; the
/// service hands out transient copies of this struct, the store owns the
/// durable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: AccountNumber,
    pub customer_name: String,
    pub balance: Cents,
}

impl Account {
    pub fn new(account_number: AccountNumber, customer_name: impl Into<String>, balance: Cents) -> Self {
        Self {
            account_number,
            customer_name: customer_name.into(),
            balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {{ number: {}, customer: {}, balance: {} }}",
            self.account_number,
            self.customer_name,
            crate::domain::format_cents(self.balance)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_new() {
        let account = Account::new(42, "Alice", 10000);
        assert_eq!(account.account_number, 42);
        assert_eq!(account.customer_name, "Alice");
        assert_eq!(account.balance, 10000);
    }

    #[test]
    fn test_account_display_formats_balance() {
        let account = Account::new(7, "Bob", 12345);
        let rendered = account.to_string();
        assert!(rendered.contains("number: 7"));
        assert!(rendered.contains("customer: Bob"));
        assert!(rendered.contains("123.45"));
    }
}
