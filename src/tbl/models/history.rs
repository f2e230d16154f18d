use super::TransactionKind;

use crate::Money;

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%d-%m-%y %H:%M:%S";

/// A transaction that was successfully applied to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn formatted_timestamp(&self) -> String {
        return self.timestamp.format(TIMESTAMP_FORMAT).to_string();
    }
}

/// Append-only log of the transactions applied to one account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        timestamp: DateTime<Local>,
    ) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        return &self.entries;
    }

    /// Counts every withdrawal ever recorded, the log is never pruned
    pub fn withdrawal_count(&self) -> usize {
        return self.count_of(TransactionKind::Withdrawal);
    }

    pub fn count_of(&self, kind: TransactionKind) -> usize {
        return self.entries.iter().filter(|entry| entry.kind == kind).count();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
