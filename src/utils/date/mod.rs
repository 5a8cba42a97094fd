// Date utility functions
// Calendar arithmetic on chrono dates; month lengths and leap years come from chrono itself

use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Years kept free at either end of chrono's range, enough for a padded day
/// grid or a full 12-year block around any reference date.
const REFERENCE_MARGIN_YEARS: i32 = 24;

/// Earliest year a picker may be anchored at.
pub fn min_reference_year() -> i32 {
    NaiveDate::MIN.year() + REFERENCE_MARGIN_YEARS
}

/// Latest year a picker may be anchored at.
pub fn max_reference_year() -> i32 {
    NaiveDate::MAX.year() - REFERENCE_MARGIN_YEARS
}

/// Shift a date by the given number of months, landing on day 1.
///
/// Always normalizing to the first avoids rolling Jan 31 over into March.
/// Results stop at the first or last month of the anchorable years.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let (year, month) = match total_months.div_euclid(12) {
        year if year > max_reference_year() => (max_reference_year(), 12),
        year if year < min_reference_year() => (min_reference_year(), 1),
        year => (year, (total_months.rem_euclid(12) + 1) as u32),
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .or_else(|| date.with_day(1))
        .unwrap_or(date)
}

/// First day of `date`'s month, pulled inside the anchorable years.
pub fn reference_month(date: NaiveDate) -> NaiveDate {
    shift_month(date, 0)
}

/// Number of days from `week_start` back to `date`'s weekday (0-6).
pub fn days_since_week_start(date: NaiveDate, week_start: Weekday) -> i64 {
    let offset = date.weekday().num_days_from_sunday() as i64
        - week_start.num_days_from_sunday() as i64;
    offset.rem_euclid(7)
}
