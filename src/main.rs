use std::env;
use std::error::Error;
use std::io;
use std::process::ExitCode;

use bank_account::statement::{read_accounts, write_statements};
use bank_account::{Account, AccountError, Status};
use tracing::level_filters::LevelFilter;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match env::args().nth(1) {
        Some(path) => print_statements(&path),
        None => run_demo(),
    };

    if let Err(e) = result {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Load every account of `path` and print their statements to stdout.
/// Lines that do not describe a valid account are reported and skipped.
fn print_statements(path: &str) -> Result<(), Box<dyn Error>> {
    let mut accounts = Vec::new();
    for result in read_accounts(path)? {
        match result {
            Ok(account) => accounts.push(account),
            Err(e) => warn!("{e}"),
        }
    }

    write_statements(io::stdout().lock(), &accounts)?;
    Ok(())
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let mut account1 = Account::new("John Doe", 1000.0, Status::Active)?;
    let mut account2 = Account::from_balance("Jane Smith", 500.0)?;
    let account3 = Account::from_string("Bob Wilson;750;active")?;

    account1.deposit(200.0)?;
    account1.withdraw(100.0)?;
    account1.transfer(300.0, &mut account2)?;

    for (label, account) in [
        ("Account 1", &account1),
        ("Account 2", &account2),
        ("Account 3", &account3),
    ] {
        println!("{label}: {account}");
        println!("{label} balance: {:.2}", account.balance());
        println!("{label} history:");
        for record in account.history() {
            println!("  {record}");
        }
    }

    match account1.withdraw(2000.0) {
        Err(e @ AccountError::InsufficientFunds { .. }) => println!("Expected error: {e}"),
        other => warn!(?other, "withdrawing 2000 should have failed"),
    }

    match account1.deposit(-50.0) {
        Err(e @ AccountError::InvalidAmount(_)) => println!("Expected error: {e}"),
        other => warn!(?other, "depositing -50 should have failed"),
    }

    Ok(())
}
