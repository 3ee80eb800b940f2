//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its itemised
//! [`BonusLine`] breakdown, produced fresh for every calculation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::arithmetic::checked_sum;
use crate::error::EngineResult;

/// The bonus categories, in breakdown order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::BonusCategory;
///
/// let category = BonusCategory::NightShift;
/// assert_eq!(format!("{:?}", category), "NightShift");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCategory {
    /// Hours sampled inside the 22:00 to 06:00 window.
    NightShift,
    /// Shift started on a Saturday or Sunday.
    Weekend,
    /// Shift started on a holiday.
    Holiday,
    /// Five or more years of service.
    LoyaltyFiveYears,
    /// Ten or more years of service, on top of the five-year line.
    LoyaltyTenYears,
    /// Hours beyond the overtime threshold.
    Overtime,
}

impl BonusCategory {
    /// Returns the display label of this category.
    pub fn label(&self) -> &'static str {
        match self {
            BonusCategory::NightShift => "Night shift",
            BonusCategory::Weekend => "Weekend bonus",
            BonusCategory::Holiday => "Holiday bonus",
            BonusCategory::LoyaltyFiveYears => "Loyalty bonus (5+ years)",
            BonusCategory::LoyaltyTenYears => "Loyalty bonus (10+ years)",
            BonusCategory::Overtime => "Overtime",
        }
    }
}

/// One item of the bonus breakdown.
///
/// `amount` keeps full precision; only [`std::fmt::Display`] rounds it to cents.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{BonusCategory, BonusLine};
/// use rust_decimal::Decimal;
///
/// let line = BonusLine::with_hours(BonusCategory::NightShift, Decimal::new(7, 0), Decimal::new(875, 1));
/// assert_eq!(line.to_string(), "Night shift: 7h @ 50% = $87.50");
///
/// let line = BonusLine::new(BonusCategory::Weekend, Decimal::new(40, 0));
/// assert_eq!(line.to_string(), "Weekend bonus: $40.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusLine {
    /// The bonus category.
    pub category: BonusCategory,
    /// Human-readable label of the category.
    pub label: String,
    /// Hours the bonus was paid on, for hour-based bonuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// The bonus amount.
    pub amount: Decimal,
}

impl BonusLine {
    /// Creates a flat bonus line.
    pub fn new(category: BonusCategory, amount: Decimal) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            hours: None,
            amount,
        }
    }

    /// Creates a bonus line paid on a number of hours.
    pub fn with_hours(category: BonusCategory, hours: Decimal, amount: Decimal) -> Self {
        Self {
            hours: Some(hours),
            ..Self::new(category, amount)
        }
    }
}

impl std::fmt::Display for BonusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        match self.hours {
            Some(hours) => write!(
                f,
                "{}: {}h @ 50% = ${:.2}",
                self.label,
                hours.normalize(),
                cents
            ),
            None => write!(f, "{}: ${:.2}", self.label, cents),
        }
    }
}

/// The result of pricing one time entry.
///
/// `total_pay` is always exactly `base_pay + bonus_pay`, and `bonus_pay` is
/// exactly the sum of the breakdown amounts.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{BonusCategory, BonusLine, PayrollResult};
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult::new(
///     Decimal::new(80, 0),
///     vec![BonusLine::new(BonusCategory::Weekend, Decimal::new(40, 0))],
/// )
/// .unwrap();
/// assert_eq!(result.bonus_pay, Decimal::new(40, 0));
/// assert_eq!(result.total_pay, Decimal::new(120, 0));
/// assert_eq!(result.breakdown_text(), "Weekend bonus: $40.00\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Wages before any bonus.
    pub base_pay: Decimal,
    /// Sum of all bonus lines.
    pub bonus_pay: Decimal,
    /// Base pay plus bonus pay.
    pub total_pay: Decimal,
    /// The bonus lines that applied, in breakdown order.
    pub breakdown: Vec<BonusLine>,
}

impl PayrollResult {
    /// Builds a result from base pay and the bonus breakdown.
    ///
    /// Fails with [`crate::error::EngineError::PayOverflow`] when the bonus
    /// sum or the total cannot be represented.
    pub fn new(base_pay: Decimal, breakdown: Vec<BonusLine>) -> EngineResult<Self> {
        let bonus_pay = checked_sum("bonus pay", breakdown.iter().map(|line| line.amount))?;
        let total_pay = checked_sum("total pay", [base_pay, bonus_pay])?;
        Ok(Self {
            base_pay,
            bonus_pay,
            total_pay,
            breakdown,
        })
    }

    /// Renders the breakdown as text, one newline-terminated line per bonus.
    pub fn breakdown_text(&self) -> String {
        render_breakdown(&self.breakdown)
    }
}

/// Renders bonus lines as text, one newline-terminated line per bonus.
pub fn render_breakdown(lines: &[BonusLine]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
