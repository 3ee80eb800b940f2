//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST endpoints for pricing time entries, storing
//! them, and reporting an employee's weekly hours and pay.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{TimeEntryRequest, WeeklyReportQuery};
pub use response::{ApiError, HealthResponse, PayrollResponse};
pub use state::AppState;
