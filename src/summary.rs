use serde::{Deserialize, Serialize};

use crate::interest::InterestModel;
use crate::loan::Loan;
use crate::types::{LoanStatus, BANK_ROSTER};

/// whole-portfolio statistics, recomputed from scratch on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanStatistics {
    pub total_loans: usize,
    pub active_loans: usize,
    pub total_amount: f64,
    pub average_rate: f64,
    pub total_interest: f64,
    pub monthly_interest: f64,
}

/// per-bank aggregation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSummary {
    pub bank: String,
    pub count: usize,
    pub total_amount: f64,
    pub avg_rate: f64,
    pub monthly_interest: f64,
    pub total_interest: f64,
}

/// per-status counts over the full collection (the tab badges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub active: usize,
    pub paid: usize,
    pub overdue: usize,
}

/// derive portfolio-level statistics
///
/// `average_rate` is exactly 0 for an empty collection. `monthly_interest`
/// sums over Active loans only; Paid and Overdue loans are excluded from
/// the monthly-burn figure.
pub fn portfolio_statistics(loans: &[Loan], model: &InterestModel) -> LoanStatistics {
    let total_loans = loans.len();
    let active_loans = loans
        .iter()
        .filter(|l| l.status == LoanStatus::Active)
        .count();
    let total_amount = loans.iter().map(|l| l.amount).sum();

    let average_rate = if loans.is_empty() {
        0.0
    } else {
        loans.iter().map(|l| l.rate).sum::<f64>() / total_loans as f64
    };

    let total_interest = loans.iter().map(|l| model.loan_total_interest(l)).sum();
    let monthly_interest = loans
        .iter()
        .filter(|l| l.status == LoanStatus::Active)
        .map(|l| model.loan_monthly_interest(l))
        .sum();

    LoanStatistics {
        total_loans,
        active_loans,
        total_amount,
        average_rate,
        total_interest,
        monthly_interest,
    }
}

/// derive one summary row per roster bank, in roster order
///
/// banks with no loans get an all-zero row. the per-bank monthly interest
/// sums over ALL of that bank's loans regardless of status, unlike the
/// portfolio-level figure which is Active-only.
pub fn bank_summaries(loans: &[Loan], model: &InterestModel) -> Vec<BankSummary> {
    BANK_ROSTER
        .iter()
        .map(|&bank| {
            let bank_loans: Vec<&Loan> = loans.iter().filter(|l| l.bank == bank).collect();

            let count = bank_loans.len();
            let total_amount = bank_loans.iter().map(|l| l.amount).sum();
            let avg_rate = if bank_loans.is_empty() {
                0.0
            } else {
                bank_loans.iter().map(|l| l.rate).sum::<f64>() / count as f64
            };
            let monthly_interest = bank_loans
                .iter()
                .map(|l| model.loan_monthly_interest(l))
                .sum();
            let total_interest = bank_loans
                .iter()
                .map(|l| model.loan_total_interest(l))
                .sum();

            BankSummary {
                bank: bank.to_string(),
                count,
                total_amount,
                avg_rate,
                monthly_interest,
                total_interest,
            }
        })
        .collect()
}

/// count loans per status over the full collection
pub fn status_counts(loans: &[Loan]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for loan in loans {
        match loan.status {
            LoanStatus::Active => counts.active += 1,
            LoanStatus::Paid => counts.paid += 1,
            LoanStatus::Overdue => counts.overdue += 1,
        }
    }
    counts
}
