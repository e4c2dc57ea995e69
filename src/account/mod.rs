//! Bank account with validated deposits, withdrawals and transfers.
//!
//! Every operation validates its input before touching any state, and every
//! balance change is recorded in the account's transaction history.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::model::{AccountNumber, Amount, Status, TransactionKind, TransactionRecord};

mod error;
pub use error::{AccountError, InvalidAccountError, ParseAccountError};

mod numbers;
pub use numbers::{AccountNumbers, DEFAULT_SEED};

/// A single bank account.
///
/// The balance never goes negative and the history always starts with the
/// `AccountCreated` record.
#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: Amount,
    status: Status,
    history: Vec<TransactionRecord>,
}

/// Construction
impl Account {
    /// Open an account numbered by the process-wide generator.
    pub fn new(
        holder: impl Into<String>,
        initial_balance: Amount,
        status: Status,
    ) -> Result<Self, AccountError> {
        Self::new_in(AccountNumbers::global(), holder, initial_balance, status)
    }

    /// Open an account numbered by `numbers`.
    ///
    /// A zero initial balance is allowed. The generator only advances once the
    /// inputs are accepted.
    pub fn new_in(
        numbers: &AccountNumbers,
        holder: impl Into<String>,
        initial_balance: Amount,
        status: Status,
    ) -> Result<Self, AccountError> {
        let balance = Self::validate_balance(initial_balance)?;
        let number = numbers.next();
        let holder = holder.into();

        debug!(account = number, holder = %holder, balance, %status, "account created");

        Ok(Self {
            number,
            holder,
            balance,
            status,
            history: vec![TransactionRecord::new(
                TransactionKind::AccountCreated,
                balance,
                balance,
            )],
        })
    }

    /// Open an active account with the given balance.
    pub fn from_balance(
        holder: impl Into<String>,
        initial_balance: Amount,
    ) -> Result<Self, AccountError> {
        Self::from_balance_in(AccountNumbers::global(), holder, initial_balance)
    }

    pub fn from_balance_in(
        numbers: &AccountNumbers,
        holder: impl Into<String>,
        initial_balance: Amount,
    ) -> Result<Self, AccountError> {
        Self::new_in(numbers, holder, initial_balance, Status::default())
    }

    /// Parse a `holder;balance;status` string, e.g. `"Bob Wilson;750;active"`.
    ///
    /// Any failure is reported as [`AccountError::InvalidAccount`] wrapping the
    /// cause.
    pub fn from_string(data: &str) -> Result<Self, AccountError> {
        Self::from_string_in(AccountNumbers::global(), data)
    }

    pub fn from_string_in(numbers: &AccountNumbers, data: &str) -> Result<Self, AccountError> {
        let fields: Vec<&str> = data.split(';').collect();
        Self::from_fields_in(numbers, &fields)
    }

    /// Build an account from already split `holder`, `balance` and `status` fields.
    pub(crate) fn from_fields_in(
        numbers: &AccountNumbers,
        fields: &[&str],
    ) -> Result<Self, AccountError> {
        let [holder, balance, status] = fields else {
            return Err(ParseAccountError::FieldCount(fields.len()).into());
        };

        let balance = balance.trim();
        let balance: Amount = balance
            .parse()
            .map_err(|source| ParseAccountError::Balance {
                value: balance.to_string(),
                source,
            })?;

        // balance is checked before status, as in construction
        Self::validate_balance(balance).map_err(rejected)?;
        let status: Status = status.trim().parse().map_err(rejected)?;

        Self::new_in(numbers, holder.trim(), balance, status)
            .map_err(|e| AccountError::from(rejected(e)))
    }
}

impl FromStr for Account {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// Parsed fields that the account itself refused.
fn rejected(err: AccountError) -> ParseAccountError {
    ParseAccountError::Account(Box::new(err))
}

/// Accessors
impl Account {
    pub fn account_number(&self) -> AccountNumber {
        self.number
    }

    pub fn account_holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Borrow the history, oldest record first.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Return an independent copy of the history, oldest record first.
    pub fn transaction_history(&self) -> Vec<TransactionRecord> {
        self.history.clone()
    }

    /// Overwrite the balance without recording a transaction.
    pub fn set_balance(&mut self, value: Amount) -> Result<(), AccountError> {
        self.balance = Self::validate_balance(value)?;
        debug!(account = self.number, balance = self.balance, "balance set");
        Ok(())
    }

    /// Switch between active and inactive. Any transition is allowed.
    pub fn set_status(&mut self, status: Status) {
        debug!(account = self.number, from = %self.status, to = %status, "status changed");
        self.status = status;
    }
}

/// Operations
impl Account {
    /// Ensure `amount` can be used for a deposit, withdrawal or transfer.
    pub fn validate_amount(amount: Amount) -> Result<(), AccountError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(())
        } else {
            Err(AccountError::InvalidAmount(amount))
        }
    }

    /// Fail unless the account accepts financial operations.
    pub fn ensure_active(&self) -> Result<(), AccountError> {
        if !self.is_active() {
            return Err(InvalidAccountError::Inactive(self.number).into());
        }
        Ok(())
    }

    /// Credit `amount` and return the new balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        let result = self.apply_deposit(amount);
        self.log_result("deposit", amount, &result);
        result
    }

    /// Debit `amount` and return the new balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        let result = self.apply_withdraw(amount);
        self.log_result("withdraw", amount, &result);
        result
    }

    /// Move `amount` from this account to `target`.
    ///
    /// Both accounts must be active. The withdrawal happens before the
    /// deposit, then each side gets its transfer record.
    pub fn transfer(&mut self, amount: Amount, target: &mut Account) -> Result<(), AccountError> {
        let result = self.apply_transfer(amount, target);
        match &result {
            Ok(()) => info!(
                account = self.number,
                target = target.number,
                amount,
                balance = self.balance,
                "transfer applied"
            ),
            Err(e) => info!(
                account = self.number,
                target = target.number,
                amount,
                reason = %e,
                "transfer skipped"
            ),
        }
        result
    }
}

/// Private API
impl Account {
    /// Small helper to log operation results
    fn log_result(&self, op: &str, amount: Amount, result: &Result<Amount, AccountError>) {
        match result {
            Ok(balance) => info!(account = self.number, amount, balance, "{op} applied"),
            Err(e) => info!(account = self.number, amount, reason = %e, "{op} skipped"),
        }
    }

    /// Balances may be zero but never negative.
    fn validate_balance(value: Amount) -> Result<Amount, AccountError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(AccountError::InvalidAmount(value))
        }
    }

    fn record(&mut self, record: TransactionRecord) {
        self.history.push(record);
    }

    fn apply_deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        self.ensure_active()?;
        Self::validate_amount(amount)?;

        self.balance += amount;
        self.record(TransactionRecord::new(
            TransactionKind::Deposit,
            amount,
            self.balance,
        ));
        Ok(self.balance)
    }

    fn apply_withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        self.ensure_active()?;
        Self::validate_amount(amount)?;

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                amount,
            });
        }

        self.balance -= amount;
        self.record(TransactionRecord::new(
            TransactionKind::Withdraw,
            amount,
            self.balance,
        ));
        Ok(self.balance)
    }

    /// - Ensure self is active and the amount is valid
    /// - Ensure target is active before anything is withdrawn
    /// - Withdraw from self, then deposit into target
    /// - Record the transfer on both sides
    fn apply_transfer(&mut self, amount: Amount, target: &mut Account) -> Result<(), AccountError> {
        self.ensure_active()?;
        Self::validate_amount(amount)?;
        // a refused deposit must not leave the funds withdrawn
        target.ensure_active()?;

        self.apply_withdraw(amount)?;
        target.apply_deposit(amount)?;

        self.record(TransactionRecord::transfer(
            TransactionKind::TransferOut,
            amount,
            self.balance,
            target.number,
        ));
        target.record(TransactionRecord::transfer(
            TransactionKind::TransferIn,
            amount,
            target.balance,
            self.number,
        ));
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account(holder={:?}, number={}, balance={:.2}, status={})",
            self.holder, self.number, self.balance, self.status
        )
    }
}
