use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique repository handle for a stored loan
pub type LoanKey = Uuid;

/// the fixed lender roster backing the bank picklist and per-bank summary
pub const BANK_ROSTER: [&str; 5] = ["Bank A", "Bank B", "Bank C", "Bank D", "Bank E"];

/// loan repayment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanStatus {
    /// performing, accruing this month
    #[default]
    Active,
    /// fully repaid
    Paid,
    /// past maturity with balance outstanding
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "Active",
            LoanStatus::Paid => "Paid",
            LoanStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// visual category for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeVariant {
    Success,
    Info,
    Destructive,
}

/// dashboard tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewTab {
    /// every loan
    #[default]
    All,
    Active,
    Paid,
    Overdue,
    /// per-bank aggregation; renders aggregator output, not the filtered list
    Summary,
}

/// sort key for the loan list; every key sorts descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Amount,
    Rate,
    Disbursement,
    Interest,
}

/// bank filter; `All` skips the stage entirely
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BankFilter {
    #[default]
    All,
    Only(String),
}

/// status filter; `All` skips the stage entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LoanStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_wire_strings() {
        assert_eq!(LoanStatus::Active.to_string(), "Active");
        assert_eq!(LoanStatus::Paid.to_string(), "Paid");
        assert_eq!(LoanStatus::Overdue.to_string(), "Overdue");
    }

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&LoanStatus::Overdue).unwrap();
        assert_eq!(json, "\"Overdue\"");
        let back: LoanStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LoanStatus::Overdue);
    }

    #[test]
    fn test_roster_order() {
        assert_eq!(BANK_ROSTER.len(), 5);
        assert_eq!(BANK_ROSTER[0], "Bank A");
        assert_eq!(BANK_ROSTER[4], "Bank E");
    }
}
