/// csv export - fixed-column export plus the JSON snapshot view
use loan_portfolio_rs::{export_csv, Loan, LoanStatus, Portfolio, PortfolioSnapshot, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== csv export example ===\n");

    let mut portfolio = Portfolio::with_seed_loans();

    // record a repayment through the save path
    let entries = portfolio.entries().to_vec();
    if let Some(entry) = entries.first() {
        let paid = Loan {
            status: LoanStatus::Paid,
            ..entry.loan.clone()
        };
        portfolio.update(entry.key, paid)?;
    }

    print!("{}", export_csv(&portfolio.list()));

    let settings = Settings::default();
    let snapshot = PortfolioSnapshot::capture(&portfolio, &settings);
    println!("\nsnapshot:\n{}", snapshot.to_json()?);

    Ok(())
}
