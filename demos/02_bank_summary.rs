/// bank summary - per-lender aggregation across the fixed roster
use loan_portfolio_rs::{bank_summaries, format_currency, Portfolio, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== bank summary example ===\n");

    let portfolio = Portfolio::with_seed_loans();
    let settings = Settings::default();
    let loans = portfolio.list();

    println!(
        "{:<8} {:>6} {:>12} {:>8} {:>12} {:>12}",
        "bank", "loans", "amount", "rate", "monthly", "total"
    );
    for row in bank_summaries(&loans, &settings.interest_model()) {
        println!(
            "{:<8} {:>6} {:>12} {:>7.2}% {:>12} {:>12}",
            row.bank,
            row.count,
            format_currency(row.total_amount),
            row.avg_rate,
            format_currency(row.monthly_interest),
            format_currency(row.total_interest),
        );
    }

    Ok(())
}
