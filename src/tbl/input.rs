use crate::ids::Cpf;
use crate::models::TransactionKind;
use crate::Money;
use crate::Result;

use chrono::NaiveDate;
use serde::Deserialize;

use thiserror::Error;

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Represents a row of a command script that a string would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: InputEventType,

    pub cpf: String,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputEventType {
    Register,
    Open,
    Deposit,
    Withdraw,
    Statement,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: {0} missing from {1:?}")]
    MissingField(&'static str, InputEvent),

    #[error("Error parsing input event: birth date must look like dd-mm-yyyy: {0:?}")]
    InvalidBirthDate(InputEvent),
}

/// Typed shell command, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RegisterClient {
        cpf: Cpf,
        name: String,
        birth_date: NaiveDate,
        address: String,
    },
    OpenAccount {
        cpf: Cpf,
    },
    /// Applies to the client's first account
    Transact {
        cpf: Cpf,
        kind: TransactionKind,
        amount: Money,
    },
    /// Shows the statement of the client's first account
    Statement {
        cpf: Cpf,
    },
}

impl InputEvent {
    pub fn parse_command(self) -> Result<Command> {
        let cpf = Cpf::new(self.cpf.clone());

        let command = match self.typ {
            InputEventType::Register => {
                let name = self.required("name", &self.name)?;
                let address = self.required("address", &self.address)?;
                let birth_date = self.required("birth_date", &self.birth_date)?;

                let birth_date = NaiveDate::parse_from_str(&birth_date, BIRTH_DATE_FORMAT)
                    .map_err(|_| InputParseError::InvalidBirthDate(self.clone()))?;

                Command::RegisterClient {
                    cpf,
                    name,
                    birth_date,
                    address,
                }
            }
            InputEventType::Open => Command::OpenAccount { cpf },
            InputEventType::Statement => Command::Statement { cpf },
            InputEventType::Deposit => Command::Transact {
                cpf,
                kind: TransactionKind::Deposit,
                amount: Money::parse(&self.required("amount", &self.amount)?)?,
            },
            InputEventType::Withdraw => Command::Transact {
                cpf,
                kind: TransactionKind::Withdrawal,
                amount: Money::parse(&self.required("amount", &self.amount)?)?,
            },
        };

        Ok(command)
    }

    fn required(&self, field: &'static str, value: &Option<String>) -> Result<String> {
        let value = value
            .clone()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| InputParseError::MissingField(field, self.clone()))?;

        Ok(value)
    }
}
