use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{PortfolioError, Result};
use crate::interest::term_months;
use crate::types::LoanStatus;

/// one lending agreement
///
/// `term` always equals the month-difference of the two dates when the
/// record comes through [`LoanBuilder`]; it is stored rather than computed
/// on read so direct construction can override it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub bank: String,
    pub amount: f64,
    pub rate: f64,
    pub disbursement_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub term: i32,
    pub status: LoanStatus,
    pub notes: String,
}

impl Loan {
    /// builder for the validated save path
    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }
}

/// parse an ISO `YYYY-MM-DD` form field
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| PortfolioError::InvalidDate {
        value: value.to_string(),
    })
}

/// builder enforcing the form-boundary validation rules
///
/// required: id, bank, amount, rate, both dates; notes is optional and
/// status defaults to Active. `build()` recomputes the term from the dates
/// and never trusts a caller-supplied value.
#[derive(Debug, Clone, Default)]
pub struct LoanBuilder {
    id: Option<String>,
    bank: Option<String>,
    amount: Option<f64>,
    rate: Option<f64>,
    disbursement_date: Option<NaiveDate>,
    maturity_date: Option<NaiveDate>,
    status: LoanStatus,
    notes: String,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn disbursement_date(mut self, date: NaiveDate) -> Self {
        self.disbursement_date = Some(date);
        self
    }

    pub fn maturity_date(mut self, date: NaiveDate) -> Self {
        self.maturity_date = Some(date);
        self
    }

    pub fn status(mut self, status: LoanStatus) -> Self {
        self.status = status;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// validate the record and compute its term
    pub fn build(self) -> Result<Loan> {
        let id = self
            .id
            .filter(|v| !v.is_empty())
            .ok_or(PortfolioError::MissingField { field: "id" })?;

        let bank = self
            .bank
            .filter(|v| !v.is_empty())
            .ok_or(PortfolioError::MissingField { field: "bank" })?;

        let amount = self
            .amount
            .ok_or(PortfolioError::MissingField { field: "amount" })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(PortfolioError::InvalidAmount { value: amount });
        }

        let rate = self
            .rate
            .ok_or(PortfolioError::MissingField { field: "rate" })?;
        if !rate.is_finite() {
            return Err(PortfolioError::InvalidRate { value: rate });
        }

        let disbursement_date = self.disbursement_date.ok_or(PortfolioError::MissingField {
            field: "disbursement_date",
        })?;

        let maturity_date = self.maturity_date.ok_or(PortfolioError::MissingField {
            field: "maturity_date",
        })?;

        Ok(Loan {
            id,
            bank,
            amount,
            rate,
            term: term_months(disbursement_date, maturity_date),
            disbursement_date,
            maturity_date,
            status: self.status,
            notes: self.notes,
        })
    }
}
