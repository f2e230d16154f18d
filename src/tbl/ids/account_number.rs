use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub u32);

impl AccountNumber {
    /// The number handed out after `count` accounts, or None once `u32` runs out
    pub fn following(count: usize) -> Option<Self> {
        let count = u32::try_from(count).ok()?;

        return count.checked_add(1).map(Self);
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn following() {
        assert_eq!(AccountNumber::following(0), Some(AccountNumber(1)));
        assert_eq!(AccountNumber::following(41), Some(AccountNumber(42)));
        assert_eq!(
            AccountNumber::following(u32::MAX as usize - 1),
            Some(AccountNumber(u32::MAX))
        );
    }

    #[test]
    fn fail_to_follow_last_number() {
        assert_eq!(AccountNumber::following(u32::MAX as usize), None);
    }
}
