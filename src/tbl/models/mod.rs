mod account;
mod client;
mod history;
mod transaction;

pub use account::{Account, AccountError, AccountKind, CheckingLimits, Limit};
pub use client::Client;
pub use history::{History, HistoryEntry};
pub use transaction::{Transaction, TransactionKind};
