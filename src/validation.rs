//! Structural validation of time entries.
//!
//! Entries are checked before they reach the payroll engine. Checks run in a
//! fixed order and stop at the first failure; errors are not aggregated.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TimeEntry;

/// The reason a time entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No entry was supplied.
    #[error("Entry is null.")]
    MissingEntry,
    /// The employee name is empty or whitespace.
    #[error("Employee name is required.")]
    MissingEmployeeName,
    /// The classification code is empty or whitespace.
    #[error("Employee type is required.")]
    MissingEmployeeType,
    /// The hourly rate is below zero.
    #[error("Hourly rate cannot be negative.")]
    NegativeHourlyRate,
    /// Years of service is below zero.
    #[error("Years of service cannot be negative.")]
    NegativeYearsOfService,
    /// The shift ends before it starts.
    #[error("End time cannot be before start time.")]
    EndBeforeStart,
}

/// Validates a time entry, returning the first failing reason.
///
/// An unrecognised (but non-blank) classification is accepted: it is priced
/// with zero base pay rather than rejected. A zero-length shift is valid.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeEntry;
/// use payroll_engine::validation::{validate_entry, ValidationError};
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let mut entry = TimeEntry {
///     id: 0,
///     employee_id: 103,
///     employee_name: "Alice Johnson".to_string(),
///     employee_type: "Contractor".to_string(),
///     start_time: DateTime::parse_from_rfc3339("2024-06-01T09:00:00Z").unwrap(),
///     end_time: DateTime::parse_from_rfc3339("2024-06-01T18:00:00Z").unwrap(),
///     hourly_rate: Decimal::new(25, 0),
///     total_pay: Decimal::ZERO,
///     notes: None,
///     years_of_service: 1,
///     country_code: None,
/// };
/// assert_eq!(validate_entry(Some(&entry)), Ok(()));
///
/// std::mem::swap(&mut entry.start_time, &mut entry.end_time);
/// assert_eq!(validate_entry(Some(&entry)), Err(ValidationError::EndBeforeStart));
/// assert_eq!(validate_entry(None), Err(ValidationError::MissingEntry));
/// ```
pub fn validate_entry(entry: Option<&TimeEntry>) -> Result<(), ValidationError> {
    let entry = entry.ok_or(ValidationError::MissingEntry)?;

    if entry.employee_name.trim().is_empty() {
        return Err(ValidationError::MissingEmployeeName);
    }

    if entry.employee_type.trim().is_empty() {
        return Err(ValidationError::MissingEmployeeType);
    }

    if entry.hourly_rate < Decimal::ZERO {
        return Err(ValidationError::NegativeHourlyRate);
    }

    if entry.years_of_service < 0 {
        return Err(ValidationError::NegativeYearsOfService);
    }

    if entry.end_time < entry.start_time {
        return Err(ValidationError::EndBeforeStart);
    }

    Ok(())
}
