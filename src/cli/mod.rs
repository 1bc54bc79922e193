use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::domain::{format_cents, parse_cents, Account, AccountNumber};

/// Passbook - Account Ledger
#[derive(Parser)]
#[command(name = "passbook")]
#[command(about = "A minimal account-ledger service for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "passbook.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Create a new account
    Create {
        /// Account number (caller-assigned, must be unique)
        account_number: AccountNumber,

        /// Customer display name
        #[arg(short, long)]
        name: String,

        /// Opening balance (e.g., "100.00" or "100", must not be negative)
        #[arg(short, long, default_value = "0")]
        balance: String,
    },

    /// Deposit into an account
    Deposit {
        /// Account number
        account_number: AccountNumber,

        /// Amount to deposit (e.g., "50.00" or "50")
        amount: String,
    },

    /// Withdraw from an account
    Withdraw {
        /// Account number
        account_number: AccountNumber,

        /// Amount to withdraw (e.g., "50.00" or "50")
        amount: String,
    },

    /// Overwrite an account's balance directly (no sign check)
    SetBalance {
        /// Account number
        account_number: AccountNumber,

        /// New balance (negative values allowed, e.g., "-12.50")
        #[arg(allow_hyphen_values = true)]
        new_balance: String,
    },

    /// Show an account record
    Show {
        /// Account number
        account_number: AccountNumber,

        /// Emit the account as JSON instead of the human-readable line
        #[arg(long)]
        json: bool,
    },

    /// Show an account's current balance
    Balance {
        /// Account number
        account_number: AccountNumber,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                LedgerService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Create {
                account_number,
                name,
                balance,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let balance_cents = parse_cents(&balance)
                    .context("Invalid balance format. Use '100.00' or '100'")?;

                let account = service
                    .create_account(Account::new(account_number, name, balance_cents))
                    .await?;

                println!("Account created: {}", account);
            }

            Commands::Deposit {
                account_number,
                amount,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let amount_cents =
                    parse_cents(&amount).context("Invalid amount format. Use '50.00' or '50'")?;

                let account = service.deposit(account_number, amount_cents).await?;
                println!(
                    "Deposit successful. New balance: {}",
                    format_cents(account.balance)
                );
            }

            Commands::Withdraw {
                account_number,
                amount,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let amount_cents =
                    parse_cents(&amount).context("Invalid amount format. Use '50.00' or '50'")?;

                let account = service.withdraw(account_number, amount_cents).await?;
                println!(
                    "Withdrawal successful. New balance: {}",
                    format_cents(account.balance)
                );
            }

            Commands::SetBalance {
                account_number,
                new_balance,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let balance_cents = parse_cents(&new_balance)
                    .context("Invalid balance format. Use '100.00' or '-12.50'")?;

                let account = service.update_balance(account_number, balance_cents).await?;
                println!(
                    "Balance updated. New balance: {}",
                    format_cents(account.balance)
                );
            }

            Commands::Show {
                account_number,
                json,
            } => {
                let service = LedgerService::connect(&self.database).await?;
                let account = service.view_account(account_number).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&account)?);
                } else {
                    println!("{}", account);
                }
            }

            Commands::Balance { account_number } => {
                let service = LedgerService::connect(&self.database).await?;
                let balance = service.get_balance(account_number).await?;
                println!("Current balance: {}", format_cents(balance));
            }
        }

        Ok(())
    }
}
