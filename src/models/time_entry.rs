//! Time entry model and related types.
//!
//! This module defines the [`TimeEntry`] record that the payroll engine prices,
//! and the [`EmployeeType`] classification that selects the base-pay multiplier.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Milliseconds in one hour, used to turn a shift duration into fractional hours.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// The recognised employee classifications.
///
/// Classifications travel on the wire as free-form codes (`"FTE"`,
/// `"Contractor"`, `"PartTime"`). Codes are matched exactly; anything else is
/// not a recognised classification and earns no base pay.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeType;
///
/// assert_eq!(EmployeeType::from_code("Contractor"), Some(EmployeeType::Contractor));
/// assert_eq!(EmployeeType::from_code("contractor"), None);
/// assert_eq!(EmployeeType::FullTime.code(), "FTE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeType {
    /// Full-time employee, code `FTE`.
    FullTime,
    /// Contractor, code `Contractor`.
    Contractor,
    /// Part-time employee, code `PartTime`.
    PartTime,
}

impl EmployeeType {
    /// Parses a classification code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FTE" => Some(EmployeeType::FullTime),
            "Contractor" => Some(EmployeeType::Contractor),
            "PartTime" => Some(EmployeeType::PartTime),
            _ => None,
        }
    }

    /// Returns the wire code for this classification.
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "FTE",
            EmployeeType::Contractor => "Contractor",
            EmployeeType::PartTime => "PartTime",
        }
    }
}

impl std::fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A logged work shift.
///
/// Start and end are instants carrying their own UTC offset. Calendar checks
/// (weekday, holiday date, clock hour) are made in that offset without any
/// normalisation. The end is not required to follow the start here; that is
/// enforced by [`crate::validation::validate_entry`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeEntry;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry {
///     id: 0,
///     employee_id: 42,
///     employee_name: "Alice".to_string(),
///     employee_type: "FTE".to_string(),
///     start_time: DateTime::parse_from_rfc3339("2024-11-01T09:00:00Z").unwrap(),
///     end_time: DateTime::parse_from_rfc3339("2024-11-01T17:30:00Z").unwrap(),
///     hourly_rate: Decimal::new(20, 0),
///     total_pay: Decimal::ZERO,
///     notes: None,
///     years_of_service: 6,
///     country_code: None,
/// };
/// assert_eq!(entry.duration_hours(), Decimal::new(85, 1)); // 8.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// Identifier assigned by the record store (0 until stored).
    #[serde(default)]
    pub id: u64,
    /// The employee this shift belongs to.
    #[serde(default)]
    pub employee_id: u64,
    /// Display name of the employee.
    #[serde(default)]
    pub employee_name: String,
    /// Classification code (see [`EmployeeType`]).
    #[serde(default)]
    pub employee_type: String,
    /// When the shift started.
    pub start_time: DateTime<FixedOffset>,
    /// When the shift ended.
    pub end_time: DateTime<FixedOffset>,
    /// Hourly rate of pay.
    pub hourly_rate: Decimal,
    /// Total pay as computed when the entry was stored.
    #[serde(default)]
    pub total_pay: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Years of continuous service.
    #[serde(default)]
    pub years_of_service: i32,
    /// Optional two-letter country code used for overtime policy lookup.
    #[serde(default)]
    pub country_code: Option<String>,
}

impl TimeEntry {
    /// Returns the shift duration in fractional hours.
    ///
    /// Negative when the end precedes the start.
    pub fn duration_hours(&self) -> Decimal {
        let millis = (self.end_time - self.start_time).num_milliseconds();
        Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
    }

    /// Returns the recognised classification, if any.
    pub fn classification(&self) -> Option<EmployeeType> {
        EmployeeType::from_code(&self.employee_type)
    }

    /// Returns the country code when one is present and non-blank.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code
            .as_deref()
            .filter(|code| !code.trim().is_empty())
    }

    /// Copies the editable fields of `changes` onto this entry.
    ///
    /// Name, classification, start, end, hourly rate, notes and years of
    /// service are replaced. The id, employee id, country code and total pay
    /// are kept.
    pub fn apply_changes(&mut self, changes: TimeEntry) {
        self.employee_name = changes.employee_name;
        self.employee_type = changes.employee_type;
        self.start_time = changes.start_time;
        self.end_time = changes.end_time;
        self.hourly_rate = changes.hourly_rate;
        self.notes = changes.notes;
        self.years_of_service = changes.years_of_service;
    }
}
