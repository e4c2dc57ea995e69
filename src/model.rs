//! Core domain types for bank accounts.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::account::{AccountError, InvalidAccountError};

/// Account identifier.
pub type AccountNumber = u64;

/// Monetary amount. Plain floating point, no rounding policy.
pub type Amount = f64;

/// Whether an account accepts financial operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            other => Err(InvalidAccountError::UnknownStatus(other.to_string()).into()),
        }
    }
}

/// The event a [`TransactionRecord`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    AccountCreated,
    Deposit,
    Withdraw,
    /// Outgoing side of a transfer.
    TransferOut,
    /// Incoming side of a transfer.
    TransferIn,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::AccountCreated => "Account created",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
            TransactionKind::TransferOut => "Transfer to",
            TransactionKind::TransferIn => "Transfer from",
        };
        f.write_str(label)
    }
}

/// One entry of an account's transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// What happened.
    pub kind: TransactionKind,
    /// The amount involved; the initial balance for `AccountCreated`.
    pub amount: Amount,
    /// Balance of the owning account right after the event.
    pub resulting_balance: Amount,
    /// The other account of a transfer.
    pub counterparty: Option<AccountNumber>,
}

impl TransactionRecord {
    /// Create a record that has no counterparty.
    pub fn new(kind: TransactionKind, amount: Amount, resulting_balance: Amount) -> Self {
        Self {
            kind,
            amount,
            resulting_balance,
            counterparty: None,
        }
    }

    /// Create one side of a transfer.
    pub fn transfer(
        kind: TransactionKind,
        amount: Amount,
        resulting_balance: Amount,
        counterparty: AccountNumber,
    ) -> Self {
        Self {
            kind,
            amount,
            resulting_balance,
            counterparty: Some(counterparty),
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} (balance {:.2})",
            self.kind, self.amount, self.resulting_balance
        )?;
        if let Some(other) = self.counterparty {
            write!(f, " account {other}")?;
        }
        Ok(())
    }
}
