use super::{Account, AccountError};

use crate::Money;

use std::fmt;

use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        };
    }
}

/// Transaction represents a requested movement of money on an account.
///
/// It is built, applied once, and thrown away; the account's history keeps the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Money),
    Withdrawal(Money),
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        return match kind {
            TransactionKind::Deposit => Self::Deposit(amount),
            TransactionKind::Withdrawal => Self::Withdrawal(amount),
        };
    }

    pub fn kind(&self) -> TransactionKind {
        return match self {
            Self::Deposit(_) => TransactionKind::Deposit,
            Self::Withdrawal(_) => TransactionKind::Withdrawal,
        };
    }

    pub fn amount(&self) -> Money {
        return match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        };
    }

    /// Moves the money on the account, and records the movement in its history only if it succeeded
    pub fn apply(&self, account: &mut Account) -> Result<(), AccountError> {
        match self {
            Self::Deposit(amount) => account.deposit(*amount)?,
            Self::Withdrawal(amount) => account.withdraw(*amount)?,
        }

        account.record(self.kind(), self.amount(), Local::now());

        log::debug!("Applied {:?} to account {}", self, account.number());

        return Ok(());
    }
}
