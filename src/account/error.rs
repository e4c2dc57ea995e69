//! Error types for account operations.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::model::{AccountNumber, Amount};

/// Error returned by every fallible [`Account`](super::Account) operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("invalid amount {0}: must be a positive number")]
    InvalidAmount(Amount),

    #[error("insufficient funds: balance = {balance:.2}, attempted = {amount:.2}")]
    InsufficientFunds { balance: Amount, amount: Amount },

    #[error("invalid account operation: {0}")]
    InvalidAccount(#[from] InvalidAccountError),
}

/// Why an account operation was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidAccountError {
    #[error("account {0} is not active for transactions")]
    Inactive(AccountNumber),

    #[error("status must be 'active' or 'inactive', got '{0}'")]
    UnknownStatus(String),

    #[error("failed to parse account string: {0}")]
    Parse(#[from] ParseAccountError),
}

/// Failure to build an account from a `holder;balance;status` string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseAccountError {
    #[error("expected 3 fields separated by ';', found {0}")]
    FieldCount(usize),

    #[error("invalid balance '{value}': {source}")]
    Balance {
        value: String,
        source: ParseFloatError,
    },

    /// The fields parsed, but the account rejected them.
    #[error("{0}")]
    Account(#[source] Box<AccountError>),
}

impl From<ParseAccountError> for AccountError {
    fn from(err: ParseAccountError) -> Self {
        AccountError::InvalidAccount(InvalidAccountError::Parse(err))
    }
}
