//! Base pay calculation.
//!
//! This module provides the classification multipliers and the base-pay
//! formula `hours * hourly_rate * multiplier`.

use rust_decimal::Decimal;

use crate::arithmetic::checked_product;
use crate::error::EngineResult;
use crate::models::{EmployeeType, TimeEntry};

/// Multiplier for full-time employees (100%).
pub const FULL_TIME_MULTIPLIER: Decimal = Decimal::ONE;

/// Multiplier for contractors (120%).
pub const CONTRACTOR_MULTIPLIER: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Multiplier for part-time employees (95%).
pub const PART_TIME_MULTIPLIER: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

/// Returns the base-rate multiplier for a classification.
///
/// Unrecognised classifications (`None`) earn nothing.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::base_rate_multiplier;
/// use payroll_engine::models::EmployeeType;
/// use rust_decimal::Decimal;
///
/// assert_eq!(base_rate_multiplier(Some(EmployeeType::Contractor)), Decimal::new(12, 1));
/// assert_eq!(base_rate_multiplier(None), Decimal::ZERO);
/// ```
pub fn base_rate_multiplier(employee_type: Option<EmployeeType>) -> Decimal {
    match employee_type {
        Some(EmployeeType::FullTime) => FULL_TIME_MULTIPLIER,
        Some(EmployeeType::Contractor) => CONTRACTOR_MULTIPLIER,
        Some(EmployeeType::PartTime) => PART_TIME_MULTIPLIER,
        None => Decimal::ZERO,
    }
}

/// Calculates base pay for `hours` worked under the entry's classification
/// and hourly rate.
///
/// Negative hours produce negative base pay; no clamping is applied. Fails
/// with [`crate::error::EngineError::PayOverflow`] when the product cannot be
/// represented.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_base_pay;
/// use payroll_engine::models::TimeEntry;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry {
///     id: 0,
///     employee_id: 1,
///     employee_name: "Bob".to_string(),
///     employee_type: "PartTime".to_string(),
///     start_time: DateTime::parse_from_rfc3339("2024-06-03T09:00:00Z").unwrap(),
///     end_time: DateTime::parse_from_rfc3339("2024-06-03T17:00:00Z").unwrap(),
///     hourly_rate: Decimal::new(15, 0),
///     total_pay: Decimal::ZERO,
///     notes: None,
///     years_of_service: 0,
///     country_code: None,
/// };
/// // 20h * $15 * 0.95 = $285
/// let base_pay = calculate_base_pay(&entry, Decimal::new(20, 0)).unwrap();
/// assert_eq!(base_pay, Decimal::new(285, 0));
/// ```
pub fn calculate_base_pay(entry: &TimeEntry, hours: Decimal) -> EngineResult<Decimal> {
    checked_product(
        "base pay",
        &[
            hours,
            base_rate_multiplier(entry.classification()),
            entry.hourly_rate,
        ],
    )
}
