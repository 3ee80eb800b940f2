//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: the per-country overtime policies and the paid holiday list.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded {} holidays", config.config().holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaysConfig, OvertimePoliciesConfig, PayrollConfig};
