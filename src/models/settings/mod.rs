// Settings module
// Picker configuration: granularity, selection mode, week start and date bounds

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Granularity, SelectionMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub granularity: Granularity,
    pub selection_mode: SelectionMode,
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<CalendarDate>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            granularity: Granularity::Day,
            selection_mode: SelectionMode::Single,
            first_day_of_week: 0, // Sunday
            min_date: None,
            max_date: None,
        }
    }
}

impl PickerSettings {
    pub fn new(granularity: Granularity, selection_mode: SelectionMode) -> Self {
        Self {
            granularity,
            selection_mode,
            ..Self::default()
        }
    }

    /// Set the inclusive lower bound
    pub fn with_min_date(mut self, min_date: CalendarDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// Set the inclusive upper bound
    pub fn with_max_date(mut self, max_date: CalendarDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: u8) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "First day of week must be 0-6 (Sunday-Saturday), got {}",
                self.first_day_of_week
            ));
        }

        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(format!("Minimum date {} is after maximum date {}", min, max));
            }
        }

        Ok(())
    }

    /// The configured week start as a chrono weekday.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Whether `date` itself falls outside the inclusive bounds.
    pub fn is_out_of_bounds(&self, date: CalendarDate) -> bool {
        self.min_date.is_some_and(|min| date < min) || self.max_date.is_some_and(|max| date > max)
    }

    /// Whether every day of the unit containing `date` lies outside the bounds.
    ///
    /// Used for grids that only drill down: a month that is partly in range
    /// must stay reachable so its in-range days can be picked.
    pub fn is_unit_out_of_bounds(&self, date: CalendarDate, unit: Granularity) -> bool {
        let first = date.canonical(unit);
        let last = date.unit_end(unit);
        self.min_date.is_some_and(|min| last < min) || self.max_date.is_some_and(|max| first > max)
    }
}
