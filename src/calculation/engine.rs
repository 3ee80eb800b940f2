//! The payroll engine.
//!
//! [`PayrollEngine`] prices a single time entry: base pay by classification,
//! then each bonus category in breakdown order. It holds only read-only
//! collaborators and can be shared across request handlers behind an `Arc`.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::arithmetic::{checked_product, checked_sum};
use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{BonusCategory, BonusLine, HolidayCalendar, PayrollResult, TimeEntry};

use super::base_pay::calculate_base_pay;
use super::day_detection::{holiday_bonus, weekend_bonus};
use super::loyalty::loyalty_bonuses;
use super::night_shift::night_shift_bonus;
use super::overtime::{CountryOvertimeCalculator, OvertimeCalculator, fixed_threshold_overtime};

/// Share of the hourly rate paid per overtime hour (50%).
pub const OVERTIME_BONUS_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Prices time entries.
///
/// Without an overtime calculator every entry falls back to the fixed
/// 40-hour threshold, whatever its country code.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollEngine;
/// use payroll_engine::models::TimeEntry;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let engine = PayrollEngine::default();
/// let entry = TimeEntry {
///     id: 0,
///     employee_id: 7,
///     employee_name: "Alice".to_string(),
///     employee_type: "FTE".to_string(),
///     start_time: DateTime::parse_from_rfc3339("2024-11-04T09:00:00Z").unwrap(),
///     end_time: DateTime::parse_from_rfc3339("2024-11-04T17:00:00Z").unwrap(),
///     hourly_rate: Decimal::new(20, 0),
///     total_pay: Decimal::ZERO,
///     notes: None,
///     years_of_service: 5,
///     country_code: None,
/// };
///
/// let result = engine.calculate(&entry).unwrap();
/// assert_eq!(result.base_pay, Decimal::new(160, 0));
/// assert_eq!(result.bonus_pay, Decimal::new(16, 0));
/// assert_eq!(result.total_pay, Decimal::new(176, 0));
/// ```
#[derive(Clone)]
pub struct PayrollEngine {
    overtime_calculator: Option<Arc<dyn OvertimeCalculator>>,
    holidays: HolidayCalendar,
}

impl PayrollEngine {
    /// Creates an engine with the given holiday calendar and no overtime
    /// calculator.
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self {
            overtime_calculator: None,
            holidays,
        }
    }

    /// Attaches a country-aware overtime calculator.
    pub fn with_overtime_calculator(mut self, calculator: Arc<dyn OvertimeCalculator>) -> Self {
        self.overtime_calculator = Some(calculator);
        self
    }

    /// Builds an engine from loaded configuration: its holidays, and a
    /// country calculator over its overtime policies.
    pub fn from_config(config: &PayrollConfig) -> Self {
        let calculator = CountryOvertimeCalculator::new(config.policy_table());
        Self::new(config.holiday_calendar()).with_overtime_calculator(Arc::new(calculator))
    }

    /// Returns the holiday calendar in use.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns true if a country-aware overtime calculator is attached.
    pub fn has_overtime_calculator(&self) -> bool {
        self.overtime_calculator.is_some()
    }

    /// Base pay for `hours` worked.
    pub fn compute_base_pay(&self, entry: &TimeEntry, hours: Decimal) -> EngineResult<Decimal> {
        calculate_base_pay(entry, hours)
    }

    /// Computes every applicable bonus line, in breakdown order, and their sum.
    ///
    /// `hours` drives overtime; `base_pay` drives the weekend, holiday and
    /// loyalty percentages. Night hours are sampled from the entry's own
    /// instants.
    pub fn compute_bonuses(
        &self,
        entry: &TimeEntry,
        hours: Decimal,
        base_pay: Decimal,
    ) -> EngineResult<(Decimal, Vec<BonusLine>)> {
        let mut lines = Vec::new();

        lines.extend(night_shift_bonus(entry)?);
        lines.extend(weekend_bonus(entry, base_pay));
        lines.extend(holiday_bonus(entry, base_pay, &self.holidays));
        lines.extend(loyalty_bonuses(entry.years_of_service, base_pay));
        lines.extend(self.overtime_bonus(entry, hours)?);

        let total = checked_sum("bonus pay", lines.iter().map(|line| line.amount))?;
        Ok((total, lines))
    }

    /// Prices an entry end to end.
    ///
    /// No validation happens here: an entry whose end precedes its start is
    /// priced on its negative duration. Fails with
    /// [`crate::error::EngineError::PayOverflow`] when an amount cannot be
    /// represented.
    pub fn calculate(&self, entry: &TimeEntry) -> EngineResult<PayrollResult> {
        let hours = entry.duration_hours();
        let base_pay = self.compute_base_pay(entry, hours)?;
        let (bonus_pay, breakdown) = self.compute_bonuses(entry, hours, base_pay)?;
        let result = PayrollResult::new(base_pay, breakdown)?;

        debug!(
            employee_id = entry.employee_id,
            employee_type = %entry.employee_type,
            hours = %hours,
            base_pay = %result.base_pay,
            bonus_pay = %bonus_pay,
            total_pay = %result.total_pay,
            lines = result.breakdown.len(),
            "Payroll calculated"
        );

        Ok(result)
    }

    /// Overtime hours for `hours` worked, through the calculator when both it
    /// and a country code are present.
    pub fn overtime_hours(&self, entry: &TimeEntry, hours: Decimal) -> Decimal {
        match (&self.overtime_calculator, entry.country_code()) {
            (Some(calculator), Some(country_code)) => {
                calculator.overtime_hours(country_code, hours)
            }
            _ => fixed_threshold_overtime(hours),
        }
    }

    fn overtime_bonus(
        &self,
        entry: &TimeEntry,
        hours: Decimal,
    ) -> EngineResult<Option<BonusLine>> {
        let overtime = self.overtime_hours(entry, hours);
        if overtime <= Decimal::ZERO {
            return Ok(None);
        }

        let amount = checked_product(
            "overtime bonus",
            &[overtime, entry.hourly_rate, OVERTIME_BONUS_MULTIPLIER],
        )?;
        Ok(Some(BonusLine::with_hours(
            BonusCategory::Overtime,
            overtime,
            amount,
        )))
    }
}

impl Default for PayrollEngine {
    fn default() -> Self {
        Self::new(HolidayCalendar::default())
    }
}

impl std::fmt::Debug for PayrollEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayrollEngine")
            .field("has_overtime_calculator", &self.has_overtime_calculator())
            .field("holidays", &self.holidays)
            .finish()
    }
}
