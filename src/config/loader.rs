//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::calculation::PolicyTable;
use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::{HolidaysConfig, OvertimePoliciesConfig, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides the overtime policy table and holiday calendar built
/// from them.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── overtime_policies.yaml  # Country work-week thresholds
/// └── holidays.yaml           # Paid holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Loaded {} overtime policies", loader.config().overtime_policies().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - A policy has a zero-hour work week or a country code is repeated
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policies_path = path.join("overtime_policies.yaml");
        let policies = Self::load_yaml::<OvertimePoliciesConfig>(&policies_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;

        let config = PayrollConfig::new(policies.policies, holidays.holidays);
        Self::from_config(config)
    }

    /// Wraps an already-built configuration, applying the same checks as
    /// [`ConfigLoader::load`].
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &PayrollConfig) -> EngineResult<()> {
        let mut seen = HashSet::new();

        for policy in config.overtime_policies() {
            if policy.country_code.trim().is_empty() {
                return Err(EngineError::InvalidConfig {
                    message: "Overtime policy has an empty country code".to_string(),
                });
            }
            if policy.standard_work_week_hours == 0 {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "Overtime policy for {} has a zero-hour work week",
                        policy.country_code
                    ),
                });
            }
            if !seen.insert(policy.country_code.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("Duplicate overtime policy for {}", policy.country_code),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Builds the overtime policy table.
    pub fn policy_table(&self) -> PolicyTable {
        self.config.policy_table()
    }

    /// Builds the holiday calendar.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        self.config.holiday_calendar()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: PayrollConfig::default(),
        }
    }
}
