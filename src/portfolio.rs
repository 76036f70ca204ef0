use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::{PortfolioError, Result};
use crate::loan::Loan;
use crate::types::{LoanKey, LoanStatus};

/// a stored loan together with its repository handle
#[derive(Debug, Clone, PartialEq)]
pub struct LoanEntry {
    pub key: LoanKey,
    pub loan: Loan,
}

/// the authoritative, insertion-ordered loan collection
///
/// every stored loan is keyed by a generated [`LoanKey`]; mutations go
/// through the key, never through a position, so filtered or sorted views
/// cannot desynchronize from storage. duplicate user-facing `id` strings
/// are accepted. records are stored verbatim: the save path
/// ([`Loan::builder`]) recomputes the term, and a directly constructed
/// loan keeps whatever term it carries.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    entries: Vec<LoanEntry>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// append a loan and return its key
    pub fn add(&mut self, loan: Loan) -> LoanKey {
        let key = Uuid::new_v4();
        tracing::debug!(%key, id = %loan.id, bank = %loan.bank, "loan added");
        self.entries.push(LoanEntry { key, loan });
        key
    }

    /// replace the loan stored under `key`; insertion order is unchanged
    pub fn update(&mut self, key: LoanKey, loan: Loan) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.key == key)
            .ok_or(PortfolioError::LoanNotFound { key })?;

        tracing::debug!(%key, id = %loan.id, "loan updated");
        entry.loan = loan;
        Ok(())
    }

    /// delete the loan stored under `key` and return it
    pub fn remove(&mut self, key: LoanKey) -> Result<Loan> {
        let position = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or(PortfolioError::LoanNotFound { key })?;

        let entry = self.entries.remove(position);
        tracing::debug!(%key, id = %entry.loan.id, "loan removed");
        Ok(entry.loan)
    }

    pub fn get(&self, key: LoanKey) -> Option<&Loan> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.loan)
    }

    /// stored loans with their keys, in insertion order
    pub fn entries(&self) -> &[LoanEntry] {
        &self.entries
    }

    /// snapshot of the full collection in insertion order
    ///
    /// the clone keeps consumers from aliasing the backing storage; the
    /// query engine sorts its own copy and never reorders the repository
    pub fn list(&self) -> Vec<Loan> {
        self.entries.iter().map(|e| e.loan.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// the five sample loans the dashboard starts with
    ///
    /// stored verbatim, including L001's hand-entered 11-month term that
    /// differs from the month-difference of its dates
    pub fn with_seed_loans() -> Self {
        let seed = [
            ("L001", "Bank A", 1_000_000_000.0, 7.5, (2024, 1, 20), (2025, 1, 15), 11),
            ("L002", "Bank B", 500_000_000.0, 8.0, (2024, 2, 15), (2025, 2, 15), 12),
            ("L003", "Bank C", 750_000_000.0, 7.8, (2024, 3, 10), (2025, 3, 10), 12),
            ("L004", "Bank A", 300_000_000.0, 7.2, (2024, 4, 5), (2025, 4, 5), 12),
            ("L005", "Bank D", 1_200_000_000.0, 8.2, (2024, 5, 18), (2025, 5, 18), 12),
        ];

        let mut portfolio = Self::new();
        for (id, bank, amount, rate, (dy, dm, dd), (my, mm, md), term) in seed {
            portfolio.add(Loan {
                id: id.to_string(),
                bank: bank.to_string(),
                amount,
                rate,
                disbursement_date: date(dy, dm, dd),
                maturity_date: date(my, mm, md),
                term,
                status: LoanStatus::Active,
                notes: String::new(),
            });
        }
        portfolio
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // seed dates are compile-time constants and always valid
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
