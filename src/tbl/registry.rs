use crate::ids::{AccountNumber, Cpf};
use crate::models::{
    Account, AccountError, CheckingLimits, Client, HistoryEntry, Transaction, TransactionKind,
};
use crate::{AccountReport, Money, Statement};

use chrono::NaiveDate;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Client not found: {0}")]
    ClientNotFound(Cpf),

    #[error("Client already exists: {0}")]
    ClientAlreadyExists(Cpf),

    #[error("Client {0} has no account")]
    NoAccount(Cpf),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Account {0} does not belong to client {1}")]
    AccountNotOwned(AccountNumber, Cpf),

    #[error("No account numbers left after {0} accounts")]
    AccountNumbersExhausted(usize),

    #[error("Transaction failed: {0}")]
    Transaction(#[from] AccountError),
}

/// Broad category of a failure, for callers that only need to know what went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InsufficientFunds,
    LimitExceeded,
    NotFound,
    AlreadyExists,
    Internal,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        return match self {
            Self::ClientNotFound(_) | Self::NoAccount(_) | Self::AccountNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::ClientAlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::AccountNotOwned(..) => ErrorKind::Validation,
            Self::Transaction(AccountError::InvalidAmount(_)) => ErrorKind::Validation,
            Self::Transaction(AccountError::InsufficientFunds { .. }) => {
                ErrorKind::InsufficientFunds
            }
            Self::Transaction(AccountError::LimitExceeded(_)) => ErrorKind::LimitExceeded,
            Self::AccountNumbersExhausted(_) => ErrorKind::Internal,
            Self::Transaction(AccountError::Arithmetic(_)) => ErrorKind::Internal,
        };
    }
}

/// In-memory record of every client and account, created once per run
#[derive(Debug, Default)]
pub struct Registry {
    clients: Vec<Client>,
    accounts: Vec<Account>,
    limits: CheckingLimits,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose new checking accounts use the given limits instead of the defaults
    pub fn with_limits(limits: CheckingLimits) -> Self {
        return Self {
            limits,
            ..Self::default()
        };
    }

    pub fn register_client(
        &mut self,
        cpf: Cpf,
        name: String,
        birth_date: NaiveDate,
        address: String,
    ) -> Result<&Client, RegistryError> {
        if self.find_client(&cpf).is_ok() {
            return Err(RegistryError::ClientAlreadyExists(cpf));
        }

        log::debug!("Registering client {cpf}");

        self.clients.push(Client::new(cpf, name, birth_date, address));

        let idx = self.clients.len() - 1;
        return Ok(&self.clients[idx]);
    }

    pub fn find_client(&self, cpf: &Cpf) -> Result<&Client, RegistryError> {
        return self
            .clients
            .iter()
            .find(|client| &client.cpf == cpf)
            .ok_or_else(|| RegistryError::ClientNotFound(cpf.clone()));
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Account numbers start at 1 and follow the number of accounts already opened
    pub fn next_account_number(&self) -> Result<AccountNumber, RegistryError> {
        let count = self.accounts.len();

        return AccountNumber::following(count)
            .ok_or(RegistryError::AccountNumbersExhausted(count));
    }

    /// Opens a checking account for the client, under the next account number
    pub fn open_account(&mut self, cpf: &Cpf) -> Result<&Account, RegistryError> {
        let number = self.next_account_number()?;

        let client = self
            .clients
            .iter_mut()
            .find(|client| &client.cpf == cpf)
            .ok_or_else(|| RegistryError::ClientNotFound(cpf.clone()))?;

        let account = Account::checking(number, client.cpf.clone(), self.limits);

        client.add_account(number);
        self.accounts.push(account);

        log::debug!("Opened account {number} for client {cpf}");

        let idx = self.accounts.len() - 1;
        return Ok(&self.accounts[idx]);
    }

    pub fn account(&self, number: AccountNumber) -> Result<&Account, RegistryError> {
        return self
            .index_of(number)
            .map(|idx| &self.accounts[idx])
            .ok_or(RegistryError::AccountNotFound(number));
    }

    /// Every account, in the order it was opened
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn first_account_of(&self, client: &Client) -> Result<&Account, RegistryError> {
        let number = client
            .first_account()
            .ok_or_else(|| RegistryError::NoAccount(client.cpf.clone()))?;

        return self.account(number);
    }

    /// Has the client request a transaction on one of its own accounts
    pub fn apply(
        &mut self,
        cpf: &Cpf,
        number: AccountNumber,
        kind: TransactionKind,
        amount: Money,
    ) -> Result<(), RegistryError> {
        let client = self
            .clients
            .iter()
            .find(|client| &client.cpf == cpf)
            .ok_or_else(|| RegistryError::ClientNotFound(cpf.clone()))?;

        if !client.owns(number) {
            Err(RegistryError::AccountNotOwned(number, cpf.clone()))?
        }

        let idx = self
            .index_of(number)
            .ok_or(RegistryError::AccountNotFound(number))?;

        client.request_transaction(&mut self.accounts[idx], Transaction::new(kind, amount))?;

        return Ok(());
    }

    pub fn history_of(&self, number: AccountNumber) -> Result<&[HistoryEntry], RegistryError> {
        return self.account(number).map(|account| account.history().entries());
    }

    pub fn statement(&self, number: AccountNumber) -> Result<Statement, RegistryError> {
        let account = self.account(number)?;
        let holder = self.find_client(account.owner())?;

        return Ok(Statement::new(account, holder));
    }

    pub fn build_report(&self) -> Result<Vec<AccountReport>, RegistryError> {
        return self
            .accounts
            .iter()
            .map(|account| -> Result<AccountReport, RegistryError> {
                let holder = self.find_client(account.owner())?;
                Ok(AccountReport::new(account, holder))
            })
            .collect();
    }

    /// Accounts are never removed, so the number doubles as a position
    fn index_of(&self, number: AccountNumber) -> Option<usize> {
        let idx = (number.0 as usize).checked_sub(1)?;

        if idx >= self.accounts.len() {
            return None;
        }

        Some(idx)
    }
}
