use thiserror::Error;

use crate::types::LoanKey;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("required field missing: {field}")]
    MissingField {
        field: &'static str,
    },

    #[error("invalid date: {value}")]
    InvalidDate {
        value: String,
    },

    #[error("invalid amount: {value}")]
    InvalidAmount {
        value: f64,
    },

    #[error("invalid rate: {value}")]
    InvalidRate {
        value: f64,
    },

    #[error("invalid payment day: {day} (must be 1-28)")]
    InvalidPaymentDay {
        day: u8,
    },

    #[error("loan not found: {key}")]
    LoanNotFound {
        key: LoanKey,
    },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
