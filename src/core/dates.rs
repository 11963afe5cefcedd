//! Calendar-month arithmetic shared by the trend and calendar projections.

use chrono::{Datelike, Duration, NaiveDate};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    add_months(month_start(date), 1) - Duration::days(1)
}

/// Shifts a date by whole calendar months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

/// True when both dates fall within the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Short month label, e.g. `"Jul 2025"`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_months_clamps_short_months() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 11, 30), 3), date(2026, 2, 28));
        assert_eq!(add_months(date(2025, 3, 15), -3), date(2024, 12, 15));
    }

    #[test]
    fn month_bounds() {
        assert_eq!(month_start(date(2025, 7, 18)), date(2025, 7, 1));
        assert_eq!(month_end(date(2025, 7, 18)), date(2025, 7, 31));
        assert_eq!(month_end(date(2024, 2, 3)), date(2024, 2, 29));
    }

    #[test]
    fn labels_are_short_month_plus_year() {
        assert_eq!(month_label(date(2025, 7, 1)), "Jul 2025");
    }
}
