//! Overtime policy resolution.
//!
//! This module maps a country code to its standard work week. The table is
//! populated once at startup and only read afterwards, so a shared reference
//! can be used from any number of request handlers.

use std::collections::HashMap;

use crate::models::OvertimePolicy;

/// Looks up the overtime policy for a country.
///
/// Returning `None` is a defined outcome (no policy for that country), not a
/// failure.
pub trait OvertimePolicyProvider: Send + Sync {
    /// Resolves the policy for `country_code` by exact, case-sensitive match.
    fn resolve(&self, country_code: &str) -> Option<&OvertimePolicy>;
}

/// A fixed, table-backed [`OvertimePolicyProvider`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{OvertimePolicyProvider, PolicyTable};
///
/// let table = PolicyTable::seeded();
/// assert_eq!(table.resolve("UK").map(|p| p.standard_work_week_hours), Some(37));
/// assert!(table.resolve("uk").is_none());
/// assert!(table.resolve("FR").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    policies: HashMap<String, OvertimePolicy>,
}

impl PolicyTable {
    /// Builds a table from a list of policies. Later duplicates replace earlier ones.
    pub fn new(policies: impl IntoIterator<Item = OvertimePolicy>) -> Self {
        let policies = policies
            .into_iter()
            .map(|p| (p.country_code.clone(), p))
            .collect();
        Self { policies }
    }

    /// The built-in table: US 40 hours, UK 37 hours, DE 35 hours.
    pub fn seeded() -> Self {
        Self::new(default_policies())
    }

    /// Returns the number of countries in the table.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true if the table has no policies.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::seeded()
    }
}

impl OvertimePolicyProvider for PolicyTable {
    fn resolve(&self, country_code: &str) -> Option<&OvertimePolicy> {
        self.policies.get(country_code)
    }
}

/// The seed policies shipped with the engine.
pub fn default_policies() -> Vec<OvertimePolicy> {
    vec![
        OvertimePolicy::new("US", 40),
        OvertimePolicy::new("UK", 37),
        OvertimePolicy::new("DE", 35),
    ]
}
