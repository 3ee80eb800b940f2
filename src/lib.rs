//! Payroll Engine for logged time entries
//!
//! This crate prices a single logged work shift: base pay by employee
//! classification, then night-shift, weekend, holiday, loyalty and overtime
//! bonuses, with overtime thresholds resolved per country. It also ships the
//! entry validator, an in-memory time-entry store and an axum router over
//! them.

#![warn(missing_docs)]

pub mod api;
mod arithmetic;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
