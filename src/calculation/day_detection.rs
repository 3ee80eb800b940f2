//! Day detection for weekend and holiday bonuses.
//!
//! Both bonuses look only at the start instant of a shift, read in the time
//! zone that instant carries. A shift that starts on Friday night and runs
//! into Saturday earns no weekend bonus.

use chrono::{DateTime, Datelike, TimeZone, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BonusCategory, BonusLine, HolidayCalendar, TimeEntry};

/// Share of base pay added for weekend shifts (50%).
pub const WEEKEND_BONUS_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Share of base pay added for holiday shifts (100%, i.e. double pay).
pub const HOLIDAY_BONUS_MULTIPLIER: Decimal = Decimal::ONE;

/// The type of day a shift starts on.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given instant in its own time zone.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{get_day_type, DayType};
/// use chrono::DateTime;
///
/// // 2024-11-02 is a Saturday
/// let saturday = DateTime::parse_from_rfc3339("2024-11-02T23:00:00Z").unwrap();
/// assert_eq!(get_day_type(&saturday), DayType::Saturday);
///
/// // The same instant is already Sunday at +02:00
/// let sunday = DateTime::parse_from_rfc3339("2024-11-03T01:00:00+02:00").unwrap();
/// assert_eq!(get_day_type(&sunday), DayType::Sunday);
/// ```
pub fn get_day_type<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DayType {
    match datetime.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Calculates the weekend bonus line: half of base pay when the shift starts
/// on a Saturday or Sunday.
///
/// The amount never exceeds `base_pay` in magnitude, so it cannot overflow.
pub fn weekend_bonus(entry: &TimeEntry, base_pay: Decimal) -> Option<BonusLine> {
    get_day_type(&entry.start_time)
        .is_weekend()
        .then(|| BonusLine::new(BonusCategory::Weekend, base_pay * WEEKEND_BONUS_MULTIPLIER))
}

/// Calculates the holiday bonus line: base pay again when the start date is
/// in the holiday calendar.
pub fn holiday_bonus(
    entry: &TimeEntry,
    base_pay: Decimal,
    holidays: &HolidayCalendar,
) -> Option<BonusLine> {
    holidays
        .is_holiday(entry.start_time.date_naive())
        .then(|| BonusLine::new(BonusCategory::Holiday, base_pay * HOLIDAY_BONUS_MULTIPLIER))
}
