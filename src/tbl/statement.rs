use crate::ids::AccountNumber;
use crate::models::{Account, Client, HistoryEntry};
use crate::Money;

/// Everything needed to show an account's statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub branch: &'static str,
    pub number: AccountNumber,
    pub holder: String,
    pub entries: Vec<HistoryEntry>,
    pub balance: Money,
}

impl Statement {
    pub fn new(account: &Account, holder: &Client) -> Self {
        return Self {
            branch: account.branch(),
            number: account.number(),
            holder: holder.name.clone(),
            entries: account.history().entries().to_vec(),
            balance: account.balance(),
        };
    }

    /// True when no transaction was ever applied to the account
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
