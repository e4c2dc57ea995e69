pub mod account;
pub mod model;
pub mod statement;

pub use account::{Account, AccountError, AccountNumbers};
pub use model::{AccountNumber, Amount, Status, TransactionKind, TransactionRecord};
