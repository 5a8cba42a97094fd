// Display formatting for picker headers and committed values

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Granularity, Selection};
use crate::services::grid::{build_year_grid, month_name};

/// Header text for the grid being shown.
pub fn header_label(reference_date: CalendarDate, view: Granularity) -> String {
    match view {
        Granularity::Day => format!("{} {}", month_name(reference_date.month()), reference_date.year()),
        Granularity::Month => reference_date.year().to_string(),
        Granularity::Year => {
            let years = build_year_grid(reference_date);
            match (years.first(), years.last()) {
                (Some(first), Some(last)) => format!("{} - {}", first, last),
                _ => String::new(),
            }
        }
    }
}

/// Format one value at the picker's granularity.
///
/// Days use `MM/DD/YYYY`, months `March 2024`, years `2024`.
pub fn format_date(date: CalendarDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => date.naive().format("%m/%d/%Y").to_string(),
        Granularity::Month => format!("{} {}", month_name(date.month()), date.year()),
        Granularity::Year => date.year().to_string(),
    }
}

/// Text shown in the input field. Open ranges end in `-> ...`.
pub fn format_selection(selection: &Selection, granularity: Granularity) -> String {
    match selection.normalized() {
        Selection::Single { value: Some(value) } => format_date(value, granularity),
        Selection::Range {
            start: Some(start),
            end: Some(end),
        } => format!(
            "{} -> {}",
            format_date(start, granularity),
            format_date(end, granularity)
        ),
        Selection::Range {
            start: Some(start),
            end: None,
        } => format!("{} -> ...", format_date(start, granularity)),
        _ => String::new(),
    }
}
