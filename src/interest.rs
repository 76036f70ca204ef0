use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::loan::Loan;
use crate::settings::DEFAULT_YEAR_BASIS;

/// days charged for the irregular disbursement-to-first-payment window
///
/// a constant approximation of the real calendar gap; deliberately not
/// derived from the configured payment day
pub const FIRST_PERIOD_DAYS: f64 = 5.0;

/// days in the nominal interest month
pub const MONTH_DAYS: f64 = 30.0;

/// interest calculation model over a fixed day-count basis
///
/// all methods are pure and total: NaN or infinite inputs, a zero basis,
/// and non-positive terms evaluate algebraically under IEEE-754 rules
/// rather than being guarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestModel {
    pub year_basis: u32,
}

impl Default for InterestModel {
    fn default() -> Self {
        Self {
            year_basis: DEFAULT_YEAR_BASIS,
        }
    }
}

impl InterestModel {
    pub fn new(year_basis: u32) -> Self {
        Self { year_basis }
    }

    /// interest accrued over a nominal 30-day month at the annual rate
    ///
    /// `amount * (rate/100) * 30 / year_basis`
    pub fn monthly_interest(&self, amount: f64, rate: f64) -> f64 {
        amount * (rate / 100.0) * MONTH_DAYS / self.year_basis as f64
    }

    /// interest over the whole term: a 5-day first period plus
    /// `term - 1` full monthly periods
    ///
    /// `term <= 0` is not clamped; the monthly component goes negative
    pub fn total_interest(&self, amount: f64, rate: f64, term: i32) -> f64 {
        let monthly = self.monthly_interest(amount, rate);
        let first_interest = amount * (rate / 100.0) * FIRST_PERIOD_DAYS / self.year_basis as f64;
        first_interest + (term as f64 - 1.0) * monthly
    }

    /// monthly interest for a stored loan
    pub fn loan_monthly_interest(&self, loan: &Loan) -> f64 {
        self.monthly_interest(loan.amount, loan.rate)
    }

    /// total interest for a stored loan over its recorded term
    pub fn loan_total_interest(&self, loan: &Loan) -> f64 {
        self.total_interest(loan.amount, loan.rate, loan.term)
    }
}

/// whole-month difference between two dates, ignoring day-of-month
///
/// Jan 31 -> Feb 1 is one month, the same as Jan 1 -> Feb 28; negative
/// when `end` precedes `start`
pub fn term_months(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_monthly_interest() {
        let model = InterestModel::default();
        let monthly = model.monthly_interest(1_000_000_000.0, 7.5);

        assert!(close(monthly, 1_000_000_000.0 * 0.075 * 30.0 / 365.0));
        assert!(close(monthly, 6_164_383.561643836));
    }

    #[test]
    fn test_total_interest_two_bucket() {
        let model = InterestModel::default();
        let total = model.total_interest(1_000_000_000.0, 7.5, 11);

        let first = 1_000_000_000.0 * 0.075 * 5.0 / 365.0;
        let monthly = model.monthly_interest(1_000_000_000.0, 7.5);
        assert!(close(total, first + 10.0 * monthly));
        assert!(close(total, 62_671_232.87671232));
    }

    #[test]
    fn test_total_interest_degenerate_terms() {
        let model = InterestModel::default();
        let first = 10_000.0 * 0.05 * 5.0 / 365.0;
        let monthly = model.monthly_interest(10_000.0, 5.0);

        // no clamping: term 0 and negative terms evaluate algebraically
        assert!(close(model.total_interest(10_000.0, 5.0, 1), first));
        assert!(close(model.total_interest(10_000.0, 5.0, 0), first - monthly));
        assert!(close(
            model.total_interest(10_000.0, 5.0, -2),
            first - 3.0 * monthly
        ));
    }

    #[test]
    fn test_zero_year_basis_propagates_ieee() {
        let model = InterestModel::new(0);

        assert_eq!(model.monthly_interest(1_000.0, 5.0), f64::INFINITY);
        assert!(model.monthly_interest(0.0, 5.0).is_nan());
        assert!(model.total_interest(1_000.0, 5.0, 12).is_infinite());
    }

    #[test]
    fn test_nan_inputs_propagate() {
        let model = InterestModel::default();
        assert!(model.monthly_interest(f64::NAN, 5.0).is_nan());
        assert!(model.total_interest(1_000.0, f64::NAN, 12).is_nan());
    }

    #[test]
    fn test_term_months_ignores_day_of_month() {
        assert_eq!(term_months(date(2024, 1, 20), date(2025, 1, 15)), 12);
        assert_eq!(term_months(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(term_months(date(2024, 1, 1), date(2024, 2, 28)), 1);
        assert_eq!(term_months(date(2024, 3, 10), date(2024, 3, 31)), 0);
    }

    #[test]
    fn test_term_months_negative_when_reversed() {
        assert_eq!(term_months(date(2025, 1, 15), date(2024, 1, 20)), -12);
        assert_eq!(term_months(date(2024, 5, 1), date(2024, 2, 29)), -3);
    }
}
