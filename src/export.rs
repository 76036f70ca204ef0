use std::fmt::Write as _;
use std::io;

use serde::{Deserialize, Serialize};

use crate::loan::Loan;
use crate::portfolio::Portfolio;
use crate::settings::Settings;
use crate::summary::{bank_summaries, portfolio_statistics, BankSummary, LoanStatistics};

/// fixed CSV column order
pub const CSV_HEADER: &str = "Loan ID,Bank,Amount,Rate,Disbursement,Maturity,Term,Status";

/// render loans as CSV in the given (repository) order
///
/// one header row, one row per loan, every row newline-terminated. fields
/// are comma-joined without quoting; embedded commas are not escaped
/// (known limitation of the format contract).
pub fn export_csv(loans: &[Loan]) -> String {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for loan in loans {
        // infallible: writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{}",
            loan.id,
            loan.bank,
            loan.amount,
            loan.rate,
            loan.disbursement_date,
            loan.maturity_date,
            loan.term,
            loan.status
        );
    }

    tracing::debug!(rows = loans.len(), "csv export rendered");
    csv
}

/// stream the CSV to any writer; the handle is scoped to this call
pub fn write_csv<W: io::Write>(loans: &[Loan], mut writer: W) -> io::Result<()> {
    writer.write_all(export_csv(loans).as_bytes())
}

/// serializable snapshot of the whole dashboard state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub settings: Settings,
    pub loans: Vec<Loan>,
    pub statistics: LoanStatistics,
    pub bank_summaries: Vec<BankSummary>,
}

impl PortfolioSnapshot {
    /// capture loans and derived views for the current settings
    pub fn capture(portfolio: &Portfolio, settings: &Settings) -> Self {
        let loans = portfolio.list();
        let model = settings.interest_model();

        Self {
            settings: *settings,
            statistics: portfolio_statistics(&loans, &model),
            bank_summaries: bank_summaries(&loans, &model),
            loans,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LoanStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loan(id: &str, bank: &str, amount: f64, rate: f64) -> Loan {
        Loan {
            id: id.to_string(),
            bank: bank.to_string(),
            amount,
            rate,
            disbursement_date: date(2024, 1, 20),
            maturity_date: date(2025, 1, 15),
            term: 11,
            status: LoanStatus::Active,
            notes: String::new(),
        }
    }

    #[test]
    fn test_csv_shape() {
        let loans = vec![
            loan("L001", "Bank A", 1_000_000_000.0, 7.5),
            loan("L002", "Bank B", 500_000_000.0, 8.0),
        ];

        let csv = export_csv(&loans);
        // every row newline-terminated, including the last
        assert!(csv.ends_with('\n'));

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "L001,Bank A,1000000000,7.5,2024-01-20,2025-01-15,11,Active"
        );
        // a whole-number rate renders without a decimal point
        assert_eq!(
            lines[2],
            "L002,Bank B,500000000,8,2024-01-20,2025-01-15,11,Active"
        );
    }

    #[test]
    fn test_csv_preserves_given_order() {
        let loans = vec![
            loan("L002", "Bank B", 1.0, 5.0),
            loan("L001", "Bank A", 2.0, 5.0),
        ];

        let csv = export_csv(&loans);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("L002,"));
        assert!(lines[2].starts_with("L001,"));
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        let csv = export_csv(&[]);
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_csv_does_not_escape_commas() {
        let mut l = loan("L001", "Bank A", 1.0, 5.0);
        l.id = "L1,X".to_string();

        let csv = export_csv(&[l]);
        let lines: Vec<&str> = csv.lines().collect();
        // the embedded comma splits the field; preserved, not quoted
        assert!(lines[1].starts_with("L1,X,Bank A,"));
    }

    #[test]
    fn test_write_csv_to_buffer() {
        let loans = vec![loan("L001", "Bank A", 1.0, 5.0)];
        let mut buffer = Vec::new();

        write_csv(&loans, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), export_csv(&loans));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut portfolio = Portfolio::new();
        portfolio.add(loan("L001", "Bank A", 1_000_000_000.0, 7.5));
        let settings = Settings::default();

        let snapshot = PortfolioSnapshot::capture(&portfolio, &settings);
        assert_eq!(snapshot.loans.len(), 1);
        assert_eq!(snapshot.statistics.total_loans, 1);
        assert_eq!(snapshot.bank_summaries.len(), 5);

        let json = snapshot.to_json().unwrap();
        let back: PortfolioSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
