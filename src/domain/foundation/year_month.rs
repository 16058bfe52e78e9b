//! Calendar month value object used for career, project and certification dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A year and month without a day component.
///
/// Ordering is chronological. Serialized as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `month` is not within 1..=12
    /// - `InvalidFormat` if the year is outside the supported calendar range
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month as i32));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ValidationError::invalid_format(
                "year",
                format!("year {} is out of range", year),
            ));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Checks if this month is strictly after another.
    pub fn is_after(&self, other: &YearMonth) -> bool {
        self > other
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ValidationError::invalid_format("year_month", "expected YYYY-MM"))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| ValidationError::invalid_format("year_month", "year is not a number"))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| ValidationError::invalid_format("year_month", "month is not a number"))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
