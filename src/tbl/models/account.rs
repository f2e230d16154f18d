use super::{History, TransactionKind};

use crate::ids::{AccountNumber, Cpf, BRANCH_CODE};
use crate::money::{Money, MoneyError};

use chrono::{DateTime, Local};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    #[error("Insufficient balance: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Limit exceeded: {0}")]
    LimitExceeded(Limit),

    #[error(transparent)]
    Arithmetic(#[from] MoneyError),
}

/// The checking-account rule a withdrawal broke
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    #[error("withdrawal of {requested} is over the per-withdrawal limit of {limit}")]
    PerWithdrawal { requested: Money, limit: Money },

    #[error("maximum of {max} withdrawals reached")]
    WithdrawalCount { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingLimits {
    pub limit: Money,
    pub max_withdrawals: usize,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        return Self {
            limit: Money::units(1000),
            max_withdrawals: 3,
        };
    }
}

/// Rules a withdrawal has to pass on top of the balance check every account runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Basic,
    Checking(CheckingLimits),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    owner: Cpf,
    balance: Money,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: AccountNumber, owner: Cpf, kind: AccountKind) -> Self {
        return Self {
            number,
            branch: BRANCH_CODE,
            owner,
            balance: Money::ZERO,
            history: History::new(),
            kind,
        };
    }

    pub fn basic(number: AccountNumber, owner: Cpf) -> Self {
        return Self::new(number, owner, AccountKind::Basic);
    }

    pub fn checking(number: AccountNumber, owner: Cpf, limits: CheckingLimits) -> Self {
        return Self::new(number, owner, AccountKind::Checking(limits));
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        self.branch
    }

    pub fn owner(&self) -> &Cpf {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            log::debug!("Account {}: invalid deposit amount {amount}", self.number);
            Err(AccountError::InvalidAmount(amount))?
        }

        self.balance.add(&amount)?;

        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        if let AccountKind::Checking(limits) = self.kind {
            self.check_checking_limits(&limits, amount)?;
        }

        return self.withdraw_from_balance(amount);
    }

    pub(crate) fn record(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        timestamp: DateTime<Local>,
    ) {
        self.history.record(kind, amount, timestamp);
    }

    fn check_checking_limits(
        &self,
        limits: &CheckingLimits,
        amount: Money,
    ) -> Result<(), AccountError> {
        if amount > limits.limit {
            log::debug!("Account {}: withdrawal of {amount} exceeds limit", self.number);
            Err(AccountError::LimitExceeded(Limit::PerWithdrawal {
                requested: amount,
                limit: limits.limit,
            }))?
        }

        if self.history.withdrawal_count() >= limits.max_withdrawals {
            log::debug!("Account {}: maximum withdrawals exceeded", self.number);
            Err(AccountError::LimitExceeded(Limit::WithdrawalCount {
                max: limits.max_withdrawals,
            }))?
        }

        return Ok(());
    }

    /// The rule shared by every kind of account
    fn withdraw_from_balance(&mut self, amount: Money) -> Result<(), AccountError> {
        if amount > self.balance {
            log::debug!("Account {}: insufficient balance for {amount}", self.number);
            Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            })?
        }

        if !amount.is_positive() {
            log::debug!("Account {}: invalid withdrawal amount {amount}", self.number);
            Err(AccountError::InvalidAmount(amount))?
        }

        self.balance.sub(&amount)?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::Transaction;

    const SOME_NUMBER: AccountNumber = AccountNumber(1);

    const SOME_AMOUNT: Money = Money::units(500);
    const OTHER_AMOUNT: Money = Money::units(100);

    fn build_checking_account() -> Account {
        Account::checking(SOME_NUMBER, Cpf::from("111"), CheckingLimits::default())
    }

    fn build_funded_account(kind: AccountKind, amount: Money) -> Account {
        let mut account = Account::new(SOME_NUMBER, Cpf::from("111"), kind);
        Transaction::Deposit(amount).apply(&mut account).unwrap();
        account
    }

    #[test]
    fn new() {
        let account = build_checking_account();

        assert_eq!(account.number(), SOME_NUMBER);
        assert_eq!(account.branch(), "0001");
        assert_eq!(account.owner(), &Cpf::from("111"));
        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.history().is_empty());
        assert_eq!(
            account.kind(),
            AccountKind::Checking(CheckingLimits {
                limit: Money::units(1000),
                max_withdrawals: 3,
            })
        );

        let account = Account::basic(AccountNumber(2), Cpf::from("222"));
        assert_eq!(account.kind(), AccountKind::Basic);
        assert_eq!(account.number(), AccountNumber(2));
    }

    #[test]
    fn deposit() {
        let mut account = build_checking_account();

        assert!(account.deposit(SOME_AMOUNT).is_ok());
        assert_eq!(account.balance(), SOME_AMOUNT);

        // recording is the transaction's job
        assert!(account.history().is_empty());
    }

    #[test]
    fn fail_to_deposit_non_positive_amount() {
        let mut account = build_checking_account();

        assert_eq!(
            account.deposit(Money::ZERO),
            Err(AccountError::InvalidAmount(Money::ZERO))
        );
        assert_eq!(
            account.deposit(Money::units(-50)),
            Err(AccountError::InvalidAmount(Money::units(-50)))
        );
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn fail_to_deposit_on_overflow() {
        let mut account = build_checking_account();
        account.deposit(Money::MAX).unwrap();

        let res = account.deposit(Money(1));
        assert!(matches!(res, Err(AccountError::Arithmetic(MoneyError::Overflow(..)))));
        assert_eq!(account.balance(), Money::MAX);
    }

    #[test]
    fn withdraw() {
        let mut account = build_funded_account(AccountKind::Basic, SOME_AMOUNT);

        assert!(account.withdraw(OTHER_AMOUNT).is_ok());
        assert_eq!(account.balance(), Money::units(400));
    }

    #[test]
    fn withdraw_whole_balance() {
        let mut account = build_funded_account(AccountKind::Basic, SOME_AMOUNT);

        assert!(account.withdraw(SOME_AMOUNT).is_ok());
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn fail_to_withdraw_more_than_balance() {
        let mut account = build_funded_account(AccountKind::Basic, SOME_AMOUNT);

        assert_eq!(
            account.withdraw(Money::units(600)),
            Err(AccountError::InsufficientFunds {
                requested: Money::units(600),
                balance: SOME_AMOUNT,
            })
        );
        assert_eq!(account.balance(), SOME_AMOUNT);
    }

    #[test]
    fn fail_to_withdraw_non_positive_amount() {
        let mut account = build_funded_account(AccountKind::Basic, SOME_AMOUNT);

        assert_eq!(
            account.withdraw(Money::ZERO),
            Err(AccountError::InvalidAmount(Money::ZERO))
        );
        assert_eq!(
            account.withdraw(Money::units(-1)),
            Err(AccountError::InvalidAmount(Money::units(-1)))
        );
        assert_eq!(account.balance(), SOME_AMOUNT);
    }

    #[test]
    fn basic_account_has_no_limits() {
        let mut account = build_funded_account(AccountKind::Basic, Money::units(5000));

        for _ in 0..4 {
            Transaction::Withdrawal(Money::units(1001))
                .apply(&mut account)
                .unwrap();
        }

        assert_eq!(account.balance(), Money::units(996));
    }

    #[test]
    fn fail_to_withdraw_over_limit() {
        let limits = CheckingLimits::default();
        let mut account = build_funded_account(AccountKind::Checking(limits), Money::units(2000));

        let over_limit = Money::units(1000 + 1);

        assert_eq!(
            account.withdraw(over_limit),
            Err(AccountError::LimitExceeded(Limit::PerWithdrawal {
                requested: over_limit,
                limit: limits.limit,
            }))
        );
        assert_eq!(account.balance(), Money::units(2000));

        assert!(account.withdraw(limits.limit).is_ok());
    }

    #[test]
    fn limit_is_checked_before_balance() {
        let mut account = build_checking_account();

        assert!(matches!(
            account.withdraw(Money::units(5000)),
            Err(AccountError::LimitExceeded(Limit::PerWithdrawal { .. }))
        ));
    }

    #[test]
    fn fail_to_withdraw_after_max_withdrawals() {
        let mut account = build_funded_account(
            AccountKind::Checking(CheckingLimits::default()),
            SOME_AMOUNT,
        );

        for _ in 0..3 {
            Transaction::Withdrawal(OTHER_AMOUNT)
                .apply(&mut account)
                .unwrap();
        }
        assert_eq!(account.balance(), Money::units(200));

        assert_eq!(
            Transaction::Withdrawal(Money::units(1)).apply(&mut account),
            Err(AccountError::LimitExceeded(Limit::WithdrawalCount { max: 3 }))
        );
        assert_eq!(account.balance(), Money::units(200));
        assert_eq!(account.history().len(), 4);
    }

    #[test]
    fn failed_withdrawals_do_not_count_towards_max() {
        let mut account = build_funded_account(
            AccountKind::Checking(CheckingLimits {
                limit: Money::units(1000),
                max_withdrawals: 1,
            }),
            SOME_AMOUNT,
        );

        assert!(Transaction::Withdrawal(Money::units(900))
            .apply(&mut account)
            .is_err());
        assert!(Transaction::Withdrawal(OTHER_AMOUNT)
            .apply(&mut account)
            .is_ok());
        assert!(matches!(
            Transaction::Withdrawal(OTHER_AMOUNT).apply(&mut account),
            Err(AccountError::LimitExceeded(Limit::WithdrawalCount { max: 1 }))
        ));
    }

    #[test]
    fn balance_never_goes_negative() {
        let mut account = build_checking_account();

        let amounts = [500, -20, 700, 100, 0, 450, 1200, 1, 300, 50];

        for (idx, units) in amounts.iter().enumerate() {
            let amount = Money::units(*units);
            let tx = if idx % 2 == 0 {
                Transaction::Withdrawal(amount)
            } else {
                Transaction::Deposit(amount)
            };

            let _ = tx.apply(&mut account);

            assert!(account.balance() >= Money::ZERO);
        }
    }

    #[test]
    fn deposit_then_withdraw_restores_balance() {
        let mut account = build_funded_account(
            AccountKind::Checking(CheckingLimits::default()),
            OTHER_AMOUNT,
        );

        Transaction::Deposit(SOME_AMOUNT).apply(&mut account).unwrap();
        Transaction::Withdrawal(SOME_AMOUNT).apply(&mut account).unwrap();

        assert_eq!(account.balance(), OTHER_AMOUNT);
    }
}
