// Test fixtures - reusable test data
// Provides consistent dates and picker configurations across test files
#![allow(dead_code)]

use calendar_picker::models::calendar_date::CalendarDate;
use calendar_picker::models::picker::{Granularity, SelectionMode};
use calendar_picker::models::settings::PickerSettings;
use calendar_picker::services::picker::PickerEngine;

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 10, 2024
    pub fn mar_10_2024() -> CalendarDate {
        date(2024, 3, 10)
    }

    /// Returns Jan 31, 2024 (month-end rollover trap)
    pub fn jan_31_2024() -> CalendarDate {
        date(2024, 1, 31)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> CalendarDate {
        date(2024, 2, 29)
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> CalendarDate {
        date(2025, 12, 31)
    }
}

/// Sample engines for testing
pub mod engines {
    use super::*;

    pub fn engine(granularity: Granularity, mode: SelectionMode) -> PickerEngine {
        PickerEngine::new(PickerSettings::new(granularity, mode)).unwrap()
    }

    pub fn day_range() -> PickerEngine {
        engine(Granularity::Day, SelectionMode::Range)
    }

    /// Day range picker limited to March 2024
    pub fn bounded_march_range() -> PickerEngine {
        let settings = PickerSettings::new(Granularity::Day, SelectionMode::Range)
            .with_min_date(date(2024, 3, 1))
            .with_max_date(date(2024, 3, 31));
        PickerEngine::new(settings).unwrap()
    }
}
