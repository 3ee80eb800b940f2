//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod overtime_policy;
mod payroll_result;
mod time_entry;
mod weekly_report;

pub use holiday::{Holiday, HolidayCalendar};
pub use overtime_policy::OvertimePolicy;
pub use payroll_result::{BonusCategory, BonusLine, PayrollResult, render_breakdown};
pub use time_entry::{EmployeeType, TimeEntry};
pub use weekly_report::{REPORT_WINDOW_DAYS, WeeklyReport};
