//! Loading accounts from text files and writing account statements as csv.

use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::account::{Account, AccountError, AccountNumbers};
use crate::model::{AccountNumber, TransactionKind};

/// Errors raised while reading account files or writing statements
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("failed to open accounts file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to read row: {source}")]
    Read { line: u64, source: csv::Error },

    #[error("line {line}: {source}")]
    Account { line: u64, source: AccountError },

    #[error("failed to write statement row: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush statement: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Serialize)]
struct StatementRow<'a> {
    account: AccountNumber,
    holder: &'a str,
    kind: TransactionKind,
    amount: String,
    balance: String,
    counterparty: Option<AccountNumber>,
}

/// Read accounts from a file holding one `holder;balance;status` line per account.
pub fn read_accounts(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Account, StatementError>>, StatementError> {
    read_accounts_in(AccountNumbers::global(), path)
}

/// Same as [`read_accounts`], numbering accounts with `numbers`.
///
/// Fields are not quoted, so a holder name cannot contain `;`. Blank lines
/// are skipped.
pub fn read_accounts_in(
    numbers: &AccountNumbers,
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Account, StatementError>>, StatementError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(StatementError::Open)?;

    Ok(reader
        .into_records()
        .enumerate()
        .map(move |(idx, result)| {
            let fallback = idx as u64 + 1;
            let record = result.map_err(|source| StatementError::Read {
                line: source.position().map_or(fallback, |p| p.line()),
                source,
            })?;
            let line = record.position().map_or(fallback, |p| p.line());

            let fields: Vec<&str> = record.iter().collect();
            Account::from_fields_in(numbers, &fields)
                .map_err(|source| StatementError::Account { line, source })
        }))
}

/// Write the history of every account as csv rows under a single header.
pub fn write_statements<'a, W: io::Write>(
    writer: W,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> Result<(), StatementError> {
    let mut writer = csv::Writer::from_writer(writer);

    for account in accounts {
        for record in account.history() {
            writer.serialize(StatementRow {
                account: account.account_number(),
                holder: account.account_holder(),
                kind: record.kind,
                amount: format!("{:.2}", record.amount),
                balance: format!("{:.2}", record.resulting_balance),
                counterparty: record.counterparty,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
