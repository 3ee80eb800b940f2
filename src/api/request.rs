//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structures for the time-entry
//! endpoints and the query string of the weekly report.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimeEntry;

/// Request body for creating, updating or pricing a time entry.
///
/// Name and classification default to empty so that their absence is
/// reported by the entry validator rather than as a parse error. Any `id` or
/// `totalPay` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRequest {
    /// The employee this shift belongs to.
    #[serde(default)]
    pub employee_id: u64,
    /// Display name of the employee.
    #[serde(default)]
    pub employee_name: String,
    /// Classification code ("FTE", "Contractor" or "PartTime").
    #[serde(default)]
    pub employee_type: String,
    /// When the shift started (RFC 3339).
    pub start_time: DateTime<FixedOffset>,
    /// When the shift ended (RFC 3339).
    pub end_time: DateTime<FixedOffset>,
    /// Hourly rate of pay.
    pub hourly_rate: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Years of continuous service.
    #[serde(default)]
    pub years_of_service: i32,
    /// Optional two-letter country code.
    #[serde(default)]
    pub country_code: Option<String>,
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            id: 0,
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            employee_type: req.employee_type,
            start_time: req.start_time,
            end_time: req.end_time,
            hourly_rate: req.hourly_rate,
            total_pay: Decimal::ZERO,
            notes: req.notes,
            years_of_service: req.years_of_service,
            country_code: req.country_code,
        }
    }
}

/// Query string of the weekly report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportQuery {
    /// Start of the seven-day window (RFC 3339).
    pub start_date: DateTime<FixedOffset>,
}
