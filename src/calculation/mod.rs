//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pricing rules for a time entry: base pay by
//! classification, the hourly night-shift scan, weekend and holiday detection,
//! loyalty tiers, country overtime policies, and the [`PayrollEngine`] that
//! composes them into a [`crate::models::PayrollResult`].

mod base_pay;
mod day_detection;
mod engine;
mod loyalty;
mod night_shift;
mod overtime;
mod overtime_policy;

pub use base_pay::{
    CONTRACTOR_MULTIPLIER, FULL_TIME_MULTIPLIER, PART_TIME_MULTIPLIER, base_rate_multiplier,
    calculate_base_pay,
};
pub use day_detection::{
    DayType, HOLIDAY_BONUS_MULTIPLIER, WEEKEND_BONUS_MULTIPLIER, get_day_type, holiday_bonus,
    weekend_bonus,
};
pub use engine::{OVERTIME_BONUS_MULTIPLIER, PayrollEngine};
pub use loyalty::{
    LOYALTY_FIVE_YEAR_MULTIPLIER, LOYALTY_FIVE_YEAR_THRESHOLD, LOYALTY_TEN_YEAR_MULTIPLIER,
    LOYALTY_TEN_YEAR_THRESHOLD, loyalty_bonuses,
};
pub use night_shift::{
    NIGHT_SHIFT_BONUS_MULTIPLIER, NIGHT_SHIFT_END_HOUR, NIGHT_SHIFT_START_HOUR,
    count_night_hours, is_night_hour, night_shift_bonus,
};
pub use overtime::{
    CountryOvertimeCalculator, DEFAULT_OVERTIME_THRESHOLD_HOURS, FRANCE_WORK_WEEK_HOURS,
    OvertimeCalculator, fixed_threshold_overtime,
};
pub use overtime_policy::{OvertimePolicyProvider, PolicyTable, default_policies};
