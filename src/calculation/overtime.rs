//! Overtime hour calculation.
//!
//! This module turns total hours worked into overtime hours, either through a
//! country's work-week policy or through the fixed 40-hour fallback used when
//! no country or no calculator is available.

use rust_decimal::Decimal;

use super::overtime_policy::{OvertimePolicyProvider, PolicyTable};

/// Threshold used when no country-specific calculation applies.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Work week applied to France, which is handled outside the policy table.
pub const FRANCE_WORK_WEEK_HOURS: u32 = 35;

/// Computes overtime hours for a country.
pub trait OvertimeCalculator: Send + Sync {
    /// Returns the overtime hours (never negative) for `total_hours` worked in
    /// `country_code`. Unknown countries yield zero.
    fn overtime_hours(&self, country_code: &str, total_hours: Decimal) -> Decimal;
}

/// [`OvertimeCalculator`] backed by an [`OvertimePolicyProvider`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{CountryOvertimeCalculator, OvertimeCalculator};
/// use rust_decimal::Decimal;
///
/// let calculator: CountryOvertimeCalculator = CountryOvertimeCalculator::default();
/// assert_eq!(calculator.overtime_hours("US", Decimal::new(50, 0)), Decimal::new(10, 0));
/// assert_eq!(calculator.overtime_hours("FR", Decimal::new(50, 0)), Decimal::new(15, 0));
/// assert_eq!(calculator.overtime_hours("XX", Decimal::new(80, 0)), Decimal::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct CountryOvertimeCalculator<P = PolicyTable> {
    provider: P,
}

impl<P: OvertimePolicyProvider> CountryOvertimeCalculator<P> {
    /// Creates a calculator over the given policy provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the work-week threshold for a country, if one is known.
    pub fn threshold_hours(&self, country_code: &str) -> Option<u32> {
        if country_code == "FR" {
            return Some(FRANCE_WORK_WEEK_HOURS);
        }
        self.provider
            .resolve(country_code)
            .map(|policy| policy.standard_work_week_hours)
    }
}

impl Default for CountryOvertimeCalculator<PolicyTable> {
    fn default() -> Self {
        Self::new(PolicyTable::seeded())
    }
}

impl<P: OvertimePolicyProvider> OvertimeCalculator for CountryOvertimeCalculator<P> {
    fn overtime_hours(&self, country_code: &str, total_hours: Decimal) -> Decimal {
        match self.threshold_hours(country_code) {
            Some(threshold) => hours_over(total_hours, Decimal::from(threshold)),
            None => Decimal::ZERO,
        }
    }
}

/// Overtime against the fixed fallback threshold.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::fixed_threshold_overtime;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed_threshold_overtime(Decimal::new(405, 1)), Decimal::new(5, 1));
/// assert_eq!(fixed_threshold_overtime(Decimal::new(40, 0)), Decimal::ZERO);
/// ```
pub fn fixed_threshold_overtime(total_hours: Decimal) -> Decimal {
    hours_over(total_hours, DEFAULT_OVERTIME_THRESHOLD_HOURS)
}

fn hours_over(total_hours: Decimal, threshold: Decimal) -> Decimal {
    (total_hours - threshold).max(Decimal::ZERO)
}
