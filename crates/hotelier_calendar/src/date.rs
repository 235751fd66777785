// --- File: crates/hotelier_calendar/src/date.rs ---
//! Day-granular date values used by the calendar.
//!
//! `CalendarDate` has no time component and no time zone, so equality and
//! ordering are plain year/month/day comparisons.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Years accepted by the calendar. Keeps grid arithmetic far away from chrono's limits.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

/// A calendar day (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns `None` unless the triple names a real day between years 1 and 9999.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// 0 = Sunday ... 6 = Saturday
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Whole days from `self` to `other`; negative when `other` is earlier.
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The following day, if representable.
    pub fn next_day(&self) -> Option<CalendarDate> {
        self.0.succ_opt().map(CalendarDate)
    }

    /// Every day from `self` up to but excluding `end`.
    pub fn days_before(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        self.0
            .iter_days()
            .take_while(move |day| *day < end.0)
            .map(CalendarDate)
    }

    /// `count` consecutive days starting at `self`.
    pub fn days_from(self, count: usize) -> impl Iterator<Item = CalendarDate> {
        self.0.iter_days().take(count).map(CalendarDate)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
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

/// Parses `YYYY-MM-DD`. ISO date-times are accepted and truncated to their date part.
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let date_part = match trimmed.find('T') {
            Some(idx) => &trimmed[..idx],
            None => trimmed,
        };
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| DateError::InvalidDate(s.to_string()))?;
        CalendarDate::new(date.year(), date.month(), date.day())
            .ok_or_else(|| DateError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// The month shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthParts", into = "MonthParts")]
pub struct YearMonth {
    first: NaiveDate,
}

/// Wire shape of [`YearMonth`].
#[derive(Debug, Serialize, Deserialize)]
pub struct MonthParts {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        CalendarDate::new(year, month, 1)
            .map(|first| YearMonth { first: first.0 })
            .ok_or(DateError::InvalidMonth { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: CalendarDate) -> Self {
        YearMonth {
            first: date.0.with_day(1).unwrap_or(date.0),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate(self.first)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 => {
                if is_leap_year(self.year()) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Result<YearMonth, DateError> {
        self.first
            .checked_add_months(Months::new(1))
            .ok_or(DateError::InvalidMonth {
                year: self.year(),
                month: self.month() + 1,
            })
            .and_then(|first| YearMonth::new(first.year(), first.month()))
    }

    pub fn prev(&self) -> Result<YearMonth, DateError> {
        self.first
            .checked_sub_months(Months::new(1))
            .ok_or(DateError::InvalidMonth {
                year: self.year(),
                month: self.month().saturating_sub(1),
            })
            .and_then(|first| YearMonth::new(first.year(), first.month()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

impl TryFrom<MonthParts> for YearMonth {
    type Error = DateError;

    fn try_from(parts: MonthParts) -> Result<Self, Self::Error> {
        YearMonth::new(parts.year, parts.month)
    }
}

impl From<YearMonth> for MonthParts {
    fn from(month: YearMonth) -> Self {
        MonthParts {
            year: month.year(),
            month: month.month(),
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(feature = "openapi")]
mod schema {
    use super::{CalendarDate, YearMonth};
    use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
    use utoipa::openapi::{KnownFormat, RefOr, SchemaFormat};

    impl utoipa::PartialSchema for CalendarDate {
        fn schema() -> RefOr<Schema> {
            RefOr::T(Schema::Object(
                ObjectBuilder::new()
                    .schema_type(Type::String)
                    .format(Some(SchemaFormat::KnownFormat(KnownFormat::Date)))
                    .build(),
            ))
        }
    }

    impl utoipa::ToSchema for CalendarDate {}

    impl utoipa::PartialSchema for YearMonth {
        fn schema() -> RefOr<Schema> {
            let integer = || {
                RefOr::T(Schema::Object(
                    ObjectBuilder::new().schema_type(Type::Integer).build(),
                ))
            };
            RefOr::T(Schema::Object(
                ObjectBuilder::new()
                    .property("year", integer())
                    .property("month", integer())
                    .required("year")
                    .required("month")
                    .build(),
            ))
        }
    }

    impl utoipa::ToSchema for YearMonth {}
}
