use super::{Account, AccountError, Transaction};

use crate::ids::{AccountNumber, Cpf};

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub cpf: Cpf,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(cpf: Cpf, name: String, birth_date: NaiveDate, address: String) -> Self {
        return Self {
            cpf,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        };
    }

    /// Applies the transaction to the account.
    ///
    /// Does not check that the account belongs to this client, `Registry::apply` does.
    pub fn request_transaction(
        &self,
        account: &mut Account,
        transaction: Transaction,
    ) -> Result<(), AccountError> {
        log::debug!(
            "Client {} requesting {transaction:?} on account {}",
            self.cpf,
            account.number()
        );

        return transaction.apply(account);
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Account numbers in the order they were opened
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn first_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub fn owns(&self, number: AccountNumber) -> bool {
        self.accounts.contains(&number)
    }
}
