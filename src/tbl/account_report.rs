use crate::models::{Account, Client, TransactionKind};

use serde::{Deserialize, Serialize};

/// One line of the account listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub branch: String,
    pub number: u32,
    pub holder: String,
    pub cpf: String,
    pub balance: String,
    pub deposits: usize,
    pub withdrawals: usize,
}

impl AccountReport {
    pub fn new(account: &Account, holder: &Client) -> Self {
        let history = account.history();

        return Self {
            branch: account.branch().to_string(),
            number: account.number().0,
            holder: holder.name.clone(),
            cpf: holder.cpf.to_string(),
            balance: account.balance().to_string(),
            deposits: history.count_of(TransactionKind::Deposit),
            withdrawals: history.withdrawal_count(),
        };
    }
}
