use chrono::NaiveDate;
use subtrack_core::core::services::CalendarService;
use subtrack_core::domain::{BillingCycle, Expense, ExpenseCategory, ExpenseType};

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
fn month_view_collects_sorts_and_totals_a_single_month() {
    let expenses = vec![
        renewing("ConvertKit", 29.0, date(2025, 7, 18)),
        renewing("GitHub", 4.0, date(2025, 7, 5)),
        renewing("Vercel", 20.0, date(2025, 7, 15)),
        renewing("Domain", 12.0, date(2026, 1, 10)),
    ];
    let view = CalendarService::month_view(&expenses, 2025, 7);
    assert_eq!(view.label, "Jul 2025");
    let names: Vec<&str> = view.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["GitHub", "Vercel", "ConvertKit"]);
    assert!((view.total - 53.0).abs() < 1e-9);
}

#[test]
fn day_predicate_matches_only_exact_renewal_days() {
    let expenses = vec![renewing("Vercel", 20.0, date(2025, 7, 15))];
    assert!(CalendarService::has_renewal_on(&expenses, date(2025, 7, 15)));
    assert!(!CalendarService::has_renewal_on(&expenses, date(2025, 7, 14)));
    assert!(!CalendarService::has_renewal_on(&expenses, date(2025, 8, 15)));

    let events = CalendarService::renewals_on(&expenses, date(2025, 7, 15));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Vercel");
}

#[test]
fn upcoming_months_uses_calendar_months_and_skips_empty_ones() {
    // A renewal on Dec 31 belongs to December even though a fixed 30-day
    // stepping from late in the year would drift past it.
    let expenses = vec![
        renewing("July", 20.0, date(2025, 7, 31)),
        renewing("December", 12.0, date(2025, 12, 31)),
    ];
    let groups = CalendarService::upcoming_months(&expenses, date(2025, 7, 31), 6);
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["Jul 2025", "Dec 2025"]);
}

#[test]
fn year_boundary_is_crossed_correctly() {
    let expenses = vec![renewing("Domain", 12.0, date(2026, 1, 10))];
    let groups = CalendarService::upcoming_months(&expenses, date(2025, 11, 15), 6);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "Jan 2026");
}

#[test]
fn inactive_and_one_time_expenses_never_reach_the_calendar() {
    let mut inactive = renewing("Cancelled", 9.0, date(2025, 7, 9));
    inactive.active = false;
    let one_time = Expense::new(
        "Tailwind UI",
        149.0,
        ExpenseCategory::Design,
        ExpenseType::OneTime,
        date(2025, 7, 9),
    );
    let expenses = vec![inactive, one_time];
    assert!(!CalendarService::has_renewal_on(&expenses, date(2025, 7, 9)));
    assert!(CalendarService::upcoming_months(&expenses, date(2025, 7, 1), 6).is_empty());
}

#[test]
fn projection_is_idempotent() {
    let expenses = vec![
        renewing("Vercel", 20.0, date(2025, 7, 15)),
        renewing("Domain", 12.0, date(2025, 9, 10)),
    ];
    assert_eq!(
        CalendarService::upcoming_months(&expenses, date(2025, 7, 1), 6),
        CalendarService::upcoming_months(&expenses, date(2025, 7, 1), 6)
    );
}
