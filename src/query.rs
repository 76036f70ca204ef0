use serde::{Deserialize, Serialize};

use crate::interest::InterestModel;
use crate::loan::Loan;
use crate::types::{BankFilter, LoanStatus, SortKey, StatusFilter, ViewTab};

/// a filter/sort selection over the loan list
///
/// the default query matches everything and sorts by amount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanQuery {
    pub search: String,
    pub bank: BankFilter,
    pub status: StatusFilter,
    pub tab: ViewTab,
    pub sort: SortKey,
}

impl LoanQuery {
    /// produce the filtered, sorted view of `loans`
    ///
    /// stages run in a fixed order: search, bank, status, tab, sort. the
    /// result is a fresh sequence; the input is never reordered. sorting is
    /// always descending and stable, so equal keys keep their filtered
    /// relative order.
    pub fn apply(&self, loans: &[Loan], model: &InterestModel) -> Vec<Loan> {
        let mut filtered: Vec<Loan> = loans.to_vec();

        // search: case-insensitive substring over id, bank, notes
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            filtered.retain(|loan| {
                loan.id.to_lowercase().contains(&needle)
                    || loan.bank.to_lowercase().contains(&needle)
                    || loan.notes.to_lowercase().contains(&needle)
            });
        }

        // bank filter
        if let BankFilter::Only(bank) = &self.bank {
            filtered.retain(|loan| loan.bank == *bank);
        }

        // status filter
        if let StatusFilter::Only(status) = self.status {
            filtered.retain(|loan| loan.status == status);
        }

        // tab filter; All and Summary impose nothing
        if let Some(status) = tab_status(self.tab) {
            filtered.retain(|loan| loan.status == status);
        }

        // sort, descending for every key
        match self.sort {
            SortKey::Amount => filtered.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
            SortKey::Rate => filtered.sort_by(|a, b| b.rate.total_cmp(&a.rate)),
            SortKey::Disbursement => {
                filtered.sort_by(|a, b| b.disbursement_date.cmp(&a.disbursement_date))
            }
            SortKey::Interest => filtered.sort_by(|a, b| {
                model
                    .loan_total_interest(b)
                    .total_cmp(&model.loan_total_interest(a))
            }),
        }

        filtered
    }
}

fn tab_status(tab: ViewTab) -> Option<LoanStatus> {
    match tab {
        ViewTab::Active => Some(LoanStatus::Active),
        ViewTab::Paid => Some(LoanStatus::Paid),
        ViewTab::Overdue => Some(LoanStatus::Overdue),
        ViewTab::All | ViewTab::Summary => None,
    }
}
