//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::{PolicyTable, default_policies};
use crate::models::{Holiday, HolidayCalendar, OvertimePolicy};

/// Overtime policies file structure (`overtime_policies.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimePoliciesConfig {
    /// One entry per country.
    pub policies: Vec<OvertimePolicy>,
}

/// Holidays file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The paid holidays.
    pub holidays: Vec<Holiday>,
}

/// The complete payroll configuration.
///
/// This struct aggregates the overtime policy table and the holiday list.
/// [`Default`] gives the built-in seed values without touching the
/// filesystem.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.overtime_policies().len(), 3);
/// assert_eq!(config.holidays().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    overtime_policies: Vec<OvertimePolicy>,
    holidays: Vec<Holiday>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(overtime_policies: Vec<OvertimePolicy>, holidays: Vec<Holiday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            overtime_policies,
            holidays: sorted_holidays,
        }
    }

    /// Returns the configured overtime policies.
    pub fn overtime_policies(&self) -> &[OvertimePolicy] {
        &self.overtime_policies
    }

    /// Returns the configured holidays (sorted by date).
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Builds a policy table from the configured overtime policies.
    pub fn policy_table(&self) -> PolicyTable {
        PolicyTable::new(self.overtime_policies.iter().cloned())
    }

    /// Builds a holiday calendar from the configured holidays.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.holidays.clone())
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::new(default_policies(), HolidayCalendar::default().holidays)
    }
}
