use serde::{Deserialize, Serialize};

use crate::errors::{PortfolioError, Result};
use crate::interest::InterestModel;

/// default day-count divisor for all interest formulas
pub const DEFAULT_YEAR_BASIS: u32 = 365;

/// default interest payment day of month
pub const DEFAULT_PAYMENT_DAY: u8 = 25;

/// session-scoped configuration
///
/// `payment_day` is displayed but consumed by no formula; the first-period
/// stub in [`InterestModel::total_interest`] is a constant independent of it.
/// `year_basis` is threaded into every calculation as an explicit parameter,
/// never read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub payment_day: u8,
    pub year_basis: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            payment_day: DEFAULT_PAYMENT_DAY,
            year_basis: DEFAULT_YEAR_BASIS,
        }
    }
}

impl Settings {
    /// create settings, validating the payment day range (1-28)
    ///
    /// a zero `year_basis` is accepted; the formulas divide by it and the
    /// resulting infinities/NaN propagate to the caller
    pub fn new(payment_day: u8, year_basis: u32) -> Result<Self> {
        if !(1..=28).contains(&payment_day) {
            return Err(PortfolioError::InvalidPaymentDay { day: payment_day });
        }

        Ok(Self {
            payment_day,
            year_basis,
        })
    }

    /// project into the calculation model
    pub fn interest_model(&self) -> InterestModel {
        InterestModel::new(self.year_basis)
    }
}
