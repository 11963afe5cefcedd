//! Dashboard aggregations: category breakdown, monthly burn, spending trend.

use chrono::NaiveDate;

use crate::core::dates::{add_months, month_end, month_label, month_start, same_month};
use crate::domain::{CategoryTotals, Expense, ExpenseCategory};

/// Per-category slice of the active spend, derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: ExpenseCategory,
    pub total_amount: f64,
    pub count: u32,
    pub percentage_of_total: f64,
}

/// One month of the spending trend.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub label: String,
    pub total: f64,
    pub by_category: CategoryTotals,
}

pub struct SummaryService;

impl SummaryService {
    /// Breaks the active spend down by category.
    ///
    /// Sums every active expense's amount regardless of type, computes each
    /// category's share of that total, drops zero-count categories, and sorts
    /// descending by total. An empty active set yields an empty vector, never
    /// a division by zero.
    pub fn category_summary(expenses: &[Expense]) -> Vec<CategorySummary> {
        let mut totals = CategoryTotals::new();
        for expense in expenses.iter().filter(|expense| expense.active) {
            totals.add(expense.category, expense.amount);
        }
        let grand_total = totals.grand_total();

        let mut summaries: Vec<CategorySummary> = totals
            .iter()
            .filter(|(_, _, count)| *count > 0)
            .map(|(category, total_amount, count)| CategorySummary {
                category,
                total_amount,
                count,
                percentage_of_total: if grand_total > 0.0 {
                    total_amount / grand_total * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        summaries.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
        summaries
    }

    /// Normalized recurring monthly cost across all active expenses.
    ///
    /// Monthly amounts count as-is, quarterly divide by 3, yearly by 12, and
    /// custom cycles contribute nothing; one-time expenses never contribute.
    pub fn monthly_burn(expenses: &[Expense]) -> f64 {
        expenses
            .iter()
            .filter(|expense| expense.active)
            .map(Expense::monthly_equivalent)
            .sum()
    }

    /// Deterministic spending trend for the `months` calendar months ending
    /// at the reference month, oldest first.
    ///
    /// Each active recurring expense contributes its monthly-normalized
    /// amount to every month from its start month onward; each active
    /// one-time expense contributes its full amount in its start month only.
    pub fn monthly_history(
        expenses: &[Expense],
        reference: NaiveDate,
        months: u32,
    ) -> Vec<MonthlySummary> {
        let anchor = month_start(reference);
        (0..months)
            .rev()
            .map(|offset| {
                let month = add_months(anchor, -(offset as i32));
                let mut by_category = CategoryTotals::new();
                for expense in expenses.iter().filter(|expense| expense.active) {
                    let contribution = if expense.is_recurring() {
                        if expense.start_date <= month_end(month) {
                            expense.monthly_equivalent()
                        } else {
                            0.0
                        }
                    } else if same_month(expense.start_date, month) {
                        expense.amount
                    } else {
                        0.0
                    };
                    if contribution > 0.0 {
                        by_category.add(expense.category, contribution);
                    }
                }
                MonthlySummary {
                    label: month_label(month),
                    total: by_category.grand_total(),
                    by_category,
                }
            })
            .collect()
    }
}
