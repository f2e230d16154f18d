use tbl::{Result, Statement};

use csv::Writer;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

pub fn format_statement(statement: &Statement) -> String {
    let mut lines = vec![format!(
        "Statement for account {} (branch {}), holder {}",
        statement.number, statement.branch, statement.holder
    )];

    if statement.is_empty() {
        lines.push("No transactions were made.".to_string());
    }

    for entry in statement.entries.iter() {
        lines.push(format!(
            "{} {}: {}",
            entry.formatted_timestamp(),
            entry.kind,
            entry.amount
        ));
    }

    lines.push(format!("Balance: {}", statement.balance));

    return lines.join("\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    use tbl::ids::AccountNumber;
    use tbl::models::{HistoryEntry, TransactionKind};
    use tbl::Money;

    use chrono::{Local, TimeZone};

    fn build_statement(entries: Vec<HistoryEntry>, balance: Money) -> Statement {
        Statement {
            branch: "0001",
            number: AccountNumber(1),
            holder: "Ana Souza".to_string(),
            entries,
            balance,
        }
    }

    #[test]
    fn format_empty_statement() {
        let statement = build_statement(vec![], Money::ZERO);

        assert_eq!(
            format_statement(&statement),
            "Statement for account 1 (branch 0001), holder Ana Souza\n\
             No transactions were made.\n\
             Balance: 0.00"
        );
    }

    #[test]
    fn format_statement_with_entries() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        let statement = build_statement(
            vec![
                HistoryEntry {
                    kind: TransactionKind::Deposit,
                    amount: Money::units(500),
                    timestamp,
                },
                HistoryEntry {
                    kind: TransactionKind::Withdrawal,
                    amount: Money(2550),
                    timestamp,
                },
            ],
            Money(47450),
        );

        assert_eq!(
            format_statement(&statement),
            "Statement for account 1 (branch 0001), holder Ana Souza\n\
             09-03-24 14:05:07 Deposit: 500.00\n\
             09-03-24 14:05:07 Withdrawal: 25.50\n\
             Balance: 474.50"
        );
    }
}
