use std::fmt;

use thiserror::Error;

const CENTS_PER_UNIT: i64 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Amount of money in hundredths of the currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds an amount from whole currency units, ie. `Money::units(1000)` is `1000.00`
    pub const fn units(units: i64) -> Self {
        return Self(units * CENTS_PER_UNIT);
    }

    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            return Err(MoneyError::Parse("Empty amount", string.to_string()));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.split('.');

        if parts.clone().count() > 2 {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        let units = parts.next().unwrap_or_default();
        let cents = parts.next().unwrap_or_default();

        if units.is_empty() && cents.is_empty() {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        if cents.len() > 2 {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units) || !all_digits(cents) {
            return Err(MoneyError::Parse("Invalid digit", string.to_string()));
        }

        let units: i64 = if units.is_empty() {
            0
        } else {
            units
                .parse()
                .map_err(|_| MoneyError::Parse("Amount too large", string.to_string()))?
        };

        // "5" after the point means fifty cents
        let cents: i64 = format!("{:0<2}", cents)
            .parse()
            .map_err(|_| MoneyError::Parse("Invalid cents", string.to_string()))?;

        let value = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| MoneyError::Parse("Amount too large", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        let difference = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", *self, *other)
            } else {
                MoneyError::Underflow("sub", *self, *other)
            }
        })?;

        self.0 = difference;

        return Ok(());
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u64;

        return write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit);
    }
}
