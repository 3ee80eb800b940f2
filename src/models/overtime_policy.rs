//! Overtime policy model.

use serde::{Deserialize, Serialize};

/// A country's standard work week.
///
/// Hours worked beyond `standard_work_week_hours` count as overtime.
///
/// # Example
///
/// ```
/// use payroll_engine::models::OvertimePolicy;
///
/// let policy = OvertimePolicy::new("UK", 37);
/// assert_eq!(policy.country_code, "UK");
/// assert_eq!(policy.standard_work_week_hours, 37);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Two-letter country code, matched case-sensitively.
    pub country_code: String,
    /// Standard work-week length in hours.
    pub standard_work_week_hours: u32,
}

impl OvertimePolicy {
    /// Creates a policy.
    pub fn new(country_code: impl Into<String>, standard_work_week_hours: u32) -> Self {
        Self {
            country_code: country_code.into(),
            standard_work_week_hours,
        }
    }
}
