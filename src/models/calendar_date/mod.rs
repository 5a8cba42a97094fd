// Calendar date module
// Plain (year, month, day) value used by every picker operation

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::picker::Granularity;

/// Errors raised when building a [`CalendarDate`] from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarDateError {
    #[error("Month {0} is out of range (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Day {day} does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("Could not parse '{0}' as a YYYY-MM-DD date")]
    Parse(String),
}

/// A calendar day with no time-of-day or timezone component.
///
/// Equality and ordering are by calendar date. Serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from its parts, validating month and day.
    ///
    /// # Examples
    /// ```
    /// use calendar_picker::models::calendar_date::CalendarDate;
    ///
    /// let leap_day = CalendarDate::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap_day.day(), 29);
    /// assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarDateError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarDateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarDateError::InvalidDay { year, month, day })
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn parse(text: &str) -> Result<Self, CalendarDateError> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarDateError::Parse(text.to_string()))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// January 1st of this date's year.
    pub fn first_of_year(&self) -> Self {
        Self(NaiveDate::from_ymd_opt(self.0.year(), 1, 1).unwrap_or(self.0))
    }

    /// Last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        let days = crate::utils::date::days_in_month(self.year(), self.month());
        Self(self.0.with_day(days).unwrap_or(self.0))
    }

    /// December 31st of this date's year.
    pub fn last_of_year(&self) -> Self {
        Self(NaiveDate::from_ymd_opt(self.0.year(), 12, 31).unwrap_or(self.0))
    }

    /// The representative date of the unit containing `self`.
    ///
    /// Days represent themselves; months and years are represented by their
    /// first day.
    pub fn canonical(&self, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Day => *self,
            Granularity::Month => self.first_of_month(),
            Granularity::Year => self.first_of_year(),
        }
    }

    /// Last day of the unit containing `self`.
    pub fn unit_end(&self, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Day => *self,
            Granularity::Month => self.last_of_month(),
            Granularity::Year => self.last_of_year(),
        }
    }

    /// The following calendar day, saturating at chrono's maximum date.
    pub fn succ(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Shift by a signed number of days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(
            self.0
                .checked_add_signed(chrono::Duration::days(days))
                .unwrap_or(self.0),
        )
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
