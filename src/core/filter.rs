//! Client-side filtering and sorting for the expense list view.

use std::cmp::Ordering;

use crate::domain::{Expense, ExpenseCategory};

/// Predicate state for the list view: free-text search, category selection,
/// and the active-only toggle.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub search: String,
    pub categories: Vec<ExpenseCategory>,
    pub active_only: bool,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        let needle = self.search.to_lowercase();
        let search_match = needle.is_empty()
            || expense.name.to_lowercase().contains(&needle)
            || expense
                .description
                .as_deref()
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false);

        let category_match =
            self.categories.is_empty() || self.categories.contains(&expense.category);

        let active_match = !self.active_only || expense.active;

        search_match && category_match && active_match
    }
}

/// User-selectable sort orders for the expense list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    AmountAsc,
    #[default]
    AmountDesc,
    StartDateAsc,
    StartDateDesc,
}

impl SortOrder {
    fn compare(self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            SortOrder::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            SortOrder::AmountAsc => a.amount.total_cmp(&b.amount),
            SortOrder::AmountDesc => b.amount.total_cmp(&a.amount),
            SortOrder::StartDateAsc => a.start_date.cmp(&b.start_date),
            SortOrder::StartDateDesc => b.start_date.cmp(&a.start_date),
        }
    }
}

/// Applies the filter and sorts the survivors. The sort is stable, so equal
/// keys keep their input order.
pub fn filter_and_sort(
    expenses: &[Expense],
    filter: &ExpenseFilter,
    order: SortOrder,
) -> Vec<Expense> {
    let mut filtered: Vec<Expense> = expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| order.compare(a, b));
    filtered
}
