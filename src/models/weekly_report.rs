//! Weekly report model.
//!
//! A weekly report is a fold over already-priced time entries: it sums the
//! stored `total_pay` and the shift durations of one employee's entries.

use chrono::{DateTime, Duration, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::checked_sum;
use crate::error::EngineResult;

use super::TimeEntry;

/// Number of days covered by a weekly report.
pub const REPORT_WINDOW_DAYS: i64 = 7;

/// Hours and pay for one employee over a seven-day window.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WeeklyReport;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let start = DateTime::parse_from_rfc3339("2024-11-03T00:00:00Z").unwrap();
/// let report = WeeklyReport::from_entries(55, start, vec![]).unwrap();
/// assert_eq!(report.end_date.to_rfc3339(), "2024-11-10T00:00:00+00:00");
/// assert_eq!(report.total_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    /// The employee the report covers.
    pub employee_id: u64,
    /// Start of the window (inclusive).
    pub start_date: DateTime<FixedOffset>,
    /// End of the window (exclusive).
    pub end_date: DateTime<FixedOffset>,
    /// Sum of shift durations in hours.
    pub total_hours: Decimal,
    /// Sum of stored total pay.
    pub total_pay: Decimal,
    /// The entries included in the report.
    pub entries: Vec<TimeEntry>,
}

impl WeeklyReport {
    /// Returns the exclusive end of the window starting at `start_date`.
    pub fn window_end(start_date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        start_date + Duration::days(REPORT_WINDOW_DAYS)
    }

    /// Aggregates entries that the caller has already filtered to the window.
    ///
    /// Fails with [`crate::error::EngineError::PayOverflow`] when a total
    /// cannot be represented.
    pub fn from_entries(
        employee_id: u64,
        start_date: DateTime<FixedOffset>,
        entries: Vec<TimeEntry>,
    ) -> EngineResult<Self> {
        let total_hours = checked_sum(
            "weekly hours",
            entries.iter().map(TimeEntry::duration_hours),
        )?;
        let total_pay = checked_sum("weekly pay", entries.iter().map(|e| e.total_pay))?;

        Ok(Self {
            employee_id,
            start_date,
            end_date: Self::window_end(start_date),
            total_hours,
            total_pay,
            entries,
        })
    }
}
