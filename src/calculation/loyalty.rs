//! Loyalty bonus calculation.
//!
//! Tenure earns a percentage of base pay at two thresholds. The thresholds
//! stack: ten or more years earns both the five-year and the ten-year line.

use rust_decimal::Decimal;

use crate::models::{BonusCategory, BonusLine};

/// Years of service needed for the first loyalty line.
pub const LOYALTY_FIVE_YEAR_THRESHOLD: i32 = 5;

/// Years of service needed for the additional loyalty line.
pub const LOYALTY_TEN_YEAR_THRESHOLD: i32 = 10;

/// Share of base pay for five or more years (10%).
pub const LOYALTY_FIVE_YEAR_MULTIPLIER: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Additional share of base pay for ten or more years (5%).
pub const LOYALTY_TEN_YEAR_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Calculates the loyalty bonus lines for the given tenure.
///
/// Returns zero, one or two lines; the five-year line always comes first.
/// Each amount is a fraction of `base_pay` and cannot overflow.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::loyalty_bonuses;
/// use rust_decimal::Decimal;
///
/// let lines = loyalty_bonuses(12, Decimal::new(80, 0));
/// assert_eq!(lines.len(), 2);
/// let total: Decimal = lines.iter().map(|l| l.amount).sum();
/// assert_eq!(total, Decimal::new(12, 0)); // 15% of 80
/// ```
pub fn loyalty_bonuses(years_of_service: i32, base_pay: Decimal) -> Vec<BonusLine> {
    let mut lines = Vec::with_capacity(2);

    if years_of_service >= LOYALTY_FIVE_YEAR_THRESHOLD {
        lines.push(BonusLine::new(
            BonusCategory::LoyaltyFiveYears,
            base_pay * LOYALTY_FIVE_YEAR_MULTIPLIER,
        ));
    }

    if years_of_service >= LOYALTY_TEN_YEAR_THRESHOLD {
        lines.push(BonusLine::new(
            BonusCategory::LoyaltyTenYears,
            base_pay * LOYALTY_TEN_YEAR_MULTIPLIER,
        ));
    }

    lines
}
