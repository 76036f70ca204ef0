/// quick start - seed portfolio and headline statistics
use loan_portfolio_rs::{portfolio_statistics, format_currency, Portfolio, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== quick start example ===\n");

    let portfolio = Portfolio::with_seed_loans();
    let settings = Settings::default();

    let loans = portfolio.list();
    let stats = portfolio_statistics(&loans, &settings.interest_model());

    println!("total loans:    {}", stats.total_loans);
    println!("active loans:   {}", stats.active_loans);
    println!("total amount:   {} VND", format_currency(stats.total_amount));
    println!("average rate:   {:.2}%", stats.average_rate);
    println!("total interest: {} VND", format_currency(stats.total_interest));
    println!("monthly burn:   {} VND", format_currency(stats.monthly_interest));

    Ok(())
}
