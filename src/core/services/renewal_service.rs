//! Upcoming-renewal selection for the dashboard and alert views.

use chrono::{Duration, NaiveDate};

use crate::domain::Expense;

/// Default lookahead window when the caller supplies none.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

pub struct RenewalService;

impl RenewalService {
    /// Active recurring expenses whose next renewal falls in
    /// `[today, today + window_days]`, both bounds inclusive, ascending by
    /// renewal date. Expenses without a renewal date are skipped.
    pub fn upcoming_renewals(
        expenses: &[Expense],
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<Expense> {
        let horizon = today + Duration::days(window_days as i64);
        let mut upcoming: Vec<Expense> = expenses
            .iter()
            .filter(|expense| expense.active && expense.is_recurring())
            .filter(|expense| {
                expense
                    .next_renewal
                    .map(|renewal| renewal >= today && renewal <= horizon)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        upcoming.sort_by_key(|expense| expense.next_renewal);
        upcoming
    }
}
