/// filtering and sorting - the query engine over the seed loans
use loan_portfolio_rs::{
    format_currency, BankFilter, LoanQuery, Portfolio, Settings, SortKey,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== filtering and sorting example ===\n");

    let portfolio = Portfolio::with_seed_loans();
    let settings = Settings::default();
    let model = settings.interest_model();
    let loans = portfolio.list();

    // default query: everything, largest amount first
    let by_amount = LoanQuery::default().apply(&loans, &model);
    println!("by amount (descending):");
    for loan in &by_amount {
        println!("  {} {} {}", loan.id, loan.bank, format_currency(loan.amount));
    }

    // only Bank A, ordered by total interest
    let bank_a = LoanQuery {
        bank: BankFilter::Only("Bank A".to_string()),
        sort: SortKey::Interest,
        ..Default::default()
    };
    println!("\nbank A by total interest:");
    for loan in bank_a.apply(&loans, &model) {
        println!(
            "  {} -> {}",
            loan.id,
            format_currency(model.loan_total_interest(&loan))
        );
    }

    // free-text search over id, bank and notes
    let search = LoanQuery {
        search: "l003".to_string(),
        ..Default::default()
    };
    println!("\nsearch \"l003\": {} hit(s)", search.apply(&loans, &model).len());

    Ok(())
}
