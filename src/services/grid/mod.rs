//! Calendar grid builder.
//!
//! Produces the ordered dates behind each of the three picker grids: a fixed
//! 6x7 day grid padded with adjacent-month days, the twelve months of a year,
//! and a 12-year block aligned so the window does not shift while paging
//! through the years inside it.

use chrono::{Datelike, Weekday};

use crate::models::calendar_date::CalendarDate;
use crate::utils::date::{days_since_week_start, reference_month};

pub const DAY_GRID_ROWS: usize = 6;
pub const DAY_GRID_COLUMNS: usize = 7;
pub const DAY_GRID_CELLS: usize = DAY_GRID_ROWS * DAY_GRID_COLUMNS;
pub const MONTH_GRID_CELLS: usize = 12;
pub const YEAR_BLOCK_SIZE: i32 = 12;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// 42 consecutive days covering the weeks that contain `reference_date`'s month.
///
/// Index 0 always falls on `week_start`. References within a few years of
/// chrono's limits are pulled inward so all 42 days exist.
pub fn build_day_grid(reference_date: CalendarDate, week_start: Weekday) -> Vec<CalendarDate> {
    let first_of_month = CalendarDate::from(reference_month(reference_date.naive()));
    let lead = days_since_week_start(first_of_month.naive(), week_start);
    let grid_start = first_of_month.add_days(-lead);

    let mut days = Vec::with_capacity(DAY_GRID_CELLS);
    let mut current = grid_start;
    for _ in 0..DAY_GRID_CELLS {
        days.push(current);
        current = current.succ();
    }
    days
}

/// Month numbers (1-12) shown in the month grid.
pub fn build_month_grid() -> [u32; MONTH_GRID_CELLS] {
    std::array::from_fn(|i| i as u32 + 1)
}

/// First day of each month of `year`, in order.
pub fn month_dates(year: i32) -> Vec<CalendarDate> {
    build_month_grid()
        .iter()
        .filter_map(|&month| CalendarDate::from_ymd(year, month, 1).ok())
        .collect()
}

/// First year of the 12-year block containing `year`.
pub fn year_block_start(year: i32) -> i32 {
    year.div_euclid(YEAR_BLOCK_SIZE) * YEAR_BLOCK_SIZE
}

/// Twelve consecutive years, `floor(year / 12) * 12 ..= +11`.
pub fn build_year_grid(reference_date: CalendarDate) -> Vec<i32> {
    let start = year_block_start(reference_month(reference_date.naive()).year());
    (start..start + YEAR_BLOCK_SIZE).collect()
}

/// January 1st of each year in the block.
pub fn year_dates(reference_date: CalendarDate) -> Vec<CalendarDate> {
    build_year_grid(reference_date)
        .into_iter()
        .filter_map(|year| CalendarDate::from_ymd(year, 1, 1).ok())
        .collect()
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Three-letter month label used in the month grid.
pub fn month_short_name(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}

/// Weekday column headers starting at `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    let offset = week_start.num_days_from_sunday() as usize;
    std::array::from_fn(|i| WEEKDAY_NAMES[(offset + i) % 7])
}
