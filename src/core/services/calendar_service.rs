//! Projects renewal dates onto calendar views.

use chrono::{Datelike, NaiveDate};

use crate::core::dates::{add_months, month_label, month_start, same_month};
use crate::domain::Expense;

/// Renewals inside one visible month, sorted ascending, with the summed cost.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub label: String,
    pub events: Vec<Expense>,
    pub total: f64,
}

/// One month's worth of the rolling future-renewals projection.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRenewals {
    pub label: String,
    pub events: Vec<Expense>,
}

pub struct CalendarService;

impl CalendarService {
    /// Whether any active recurring expense renews on the given day.
    pub fn has_renewal_on(expenses: &[Expense], day: NaiveDate) -> bool {
        Self::calendar_events(expenses).any(|expense| expense.next_renewal == Some(day))
    }

    /// Renewals charging on one selected day.
    pub fn renewals_on(expenses: &[Expense], day: NaiveDate) -> Vec<Expense> {
        Self::calendar_events(expenses)
            .filter(|expense| expense.next_renewal == Some(day))
            .cloned()
            .collect()
    }

    /// All renewals falling inside the given calendar month, ascending by
    /// date, with their summed total.
    pub fn month_view(expenses: &[Expense], year: i32, month: u32) -> MonthView {
        let anchor = NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap_or_else(|| month_start(chrono::Local::now().date_naive()));
        let mut events: Vec<Expense> = Self::calendar_events(expenses)
            .filter(|expense| {
                expense
                    .next_renewal
                    .map(|renewal| same_month(renewal, anchor))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        events.sort_by_key(|expense| expense.next_renewal);
        let total = events.iter().map(|expense| expense.amount).sum();
        MonthView {
            label: month_label(anchor),
            events,
            total,
        }
    }

    /// Rolling future window: renewals grouped per calendar month for the
    /// reference month and the following `months - 1`, skipping months with
    /// no events.
    pub fn upcoming_months(
        expenses: &[Expense],
        reference: NaiveDate,
        months: u32,
    ) -> Vec<MonthRenewals> {
        let anchor = month_start(reference);
        (0..months as i32)
            .filter_map(|step| {
                let month = add_months(anchor, step);
                let view = Self::month_view(expenses, month.year(), month.month());
                if view.events.is_empty() {
                    None
                } else {
                    Some(MonthRenewals {
                        label: view.label,
                        events: view.events,
                    })
                }
            })
            .collect()
    }

    fn calendar_events(expenses: &[Expense]) -> impl Iterator<Item = &Expense> {
        expenses.iter().filter(|expense| {
            expense.active && expense.is_recurring() && expense.next_renewal.is_some()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BillingCycle, ExpenseCategory, ExpenseType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn renewing(name: &str, amount: f64, renewal: NaiveDate) -> Expense {
        Expense::new(
            name,
            amount,
            ExpenseCategory::Development,
            ExpenseType::Recurring,
            date(2024, 1, 1),
        )
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(renewal)
    }

    #[test]
    fn day_predicate_and_day_events_agree() {
        let day = date(2025, 7, 15);
        let expenses = vec![
            renewing("Vercel", 20.0, day),
            renewing("GitHub", 4.0, date(2025, 7, 5)),
        ];
        assert!(CalendarService::has_renewal_on(&expenses, day));
        assert!(!CalendarService::has_renewal_on(&expenses, date(2025, 7, 16)));
        let events = CalendarService::renewals_on(&expenses, day);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Vercel");
    }

    #[test]
    fn month_view_sorts_and_totals() {
        let expenses = vec![
            renewing("late", 25.0, date(2025, 7, 20)),
            renewing("early", 4.0, date(2025, 7, 5)),
            renewing("other-month", 12.0, date(2025, 8, 3)),
        ];
        let view = CalendarService::month_view(&expenses, 2025, 7);
        assert_eq!(view.label, "Jul 2025");
        let names: Vec<&str> = view.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["early", "late"]);
        assert_eq!(view.total, 29.0);
    }

    #[test]
    fn upcoming_months_steps_calendar_months_and_skips_empty() {
        let expenses = vec![
            renewing("July", 20.0, date(2025, 7, 18)),
            renewing("October", 12.0, date(2025, 10, 2)),
        ];
        let groups = CalendarService::upcoming_months(&expenses, date(2025, 7, 1), 6);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Jul 2025", "Oct 2025"]);
    }

    #[test]
    fn inactive_one_time_and_dateless_expenses_never_appear() {
        let mut inactive = renewing("inactive", 9.0, date(2025, 7, 9));
        inactive.active = false;
        let one_time = Expense::new(
            "Tailwind UI",
            149.0,
            ExpenseCategory::Design,
            ExpenseType::OneTime,
            date(2025, 7, 9),
        );
        let dateless = Expense::new(
            "no-date",
            5.0,
            ExpenseCategory::Other,
            ExpenseType::Recurring,
            date(2024, 1, 1),
        );
        let view = CalendarService::month_view(&[inactive, one_time, dateless], 2025, 7);
        assert!(view.events.is_empty());
        assert_eq!(view.total, 0.0);
    }
}
