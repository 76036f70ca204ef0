pub mod errors;
pub mod export;
pub mod format;
pub mod interest;
pub mod loan;
pub mod portfolio;
pub mod query;
pub mod settings;
pub mod summary;
pub mod types;

// re-export key types
pub use errors::{PortfolioError, Result};
pub use export::{export_csv, write_csv, PortfolioSnapshot, CSV_HEADER};
pub use format::{
    badge_variant, badge_variant_for, bank_badge_class, format_currency, format_date,
};
pub use interest::{term_months, InterestModel, FIRST_PERIOD_DAYS, MONTH_DAYS};
pub use loan::{parse_date, Loan, LoanBuilder};
pub use portfolio::{LoanEntry, Portfolio};
pub use query::LoanQuery;
pub use settings::{Settings, DEFAULT_PAYMENT_DAY, DEFAULT_YEAR_BASIS};
pub use summary::{
    bank_summaries, portfolio_statistics, status_counts, BankSummary, LoanStatistics, StatusCounts,
};
pub use types::{
    BadgeVariant, BankFilter, LoanKey, LoanStatus, SortKey, StatusFilter, ViewTab, BANK_ROSTER,
};

// re-export external dependencies that users will need
pub use chrono;
pub use uuid::Uuid;
