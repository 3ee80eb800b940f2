//! Holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types used by the
//! holiday bonus rule. The calendar is injected configuration so that engines
//! can be tested against arbitrary years.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single paid holiday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// The set of dates that earn the holiday bonus.
///
/// Matching compares calendar dates only; the time of day is ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default();
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays in this calendar.
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Creates a calendar with no holidays.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Checks if a given date is a holiday in this calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the holiday falling on the given date, if any.
    pub fn get_holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }
}

impl Default for HolidayCalendar {
    /// New Year's Day, Independence Day and Christmas Day of 2024.
    fn default() -> Self {
        let reference = [
            (1, 1, "New Year's Day"),
            (7, 4, "Independence Day"),
            (12, 25, "Christmas Day"),
        ];
        let holidays = reference
            .iter()
            .filter_map(|&(month, day, name)| {
                NaiveDate::from_ymd_opt(2024, month, day).map(|date| Holiday {
                    date,
                    name: name.to_string(),
                })
            })
            .collect();
        Self::new(holidays)
    }
}
