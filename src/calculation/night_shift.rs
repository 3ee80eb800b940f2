//! Night-shift bonus calculation.
//!
//! Night hours are found by sampling the shift once per hour, starting at the
//! start instant itself and stopping before the end instant. A sample counts
//! when its clock hour is 22 or later, or earlier than 6. This is a sampling
//! rule, not an interval overlap: a 21:30 to 22:30 shift has a single sample
//! at 21:30 and therefore no night hours.

use chrono::{DateTime, Duration, TimeZone, Timelike};
use rust_decimal::Decimal;

use crate::arithmetic::checked_product;
use crate::error::EngineResult;
use crate::models::{BonusCategory, BonusLine, TimeEntry};

/// First clock hour of the night window.
pub const NIGHT_SHIFT_START_HOUR: u32 = 22;

/// Clock hour at which the night window closes.
pub const NIGHT_SHIFT_END_HOUR: u32 = 6;

/// Share of the hourly rate paid per night hour (50%).
pub const NIGHT_SHIFT_BONUS_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns true if a clock hour falls in the night window.
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_SHIFT_START_HOUR || hour < NIGHT_SHIFT_END_HOUR
}

/// Counts night hours by hourly sampling over `[start, end)`.
///
/// Clock hours are read in the time zone the instants carry. When `end` is not
/// after `start` there are no samples and the count is zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_night_hours;
/// use chrono::DateTime;
///
/// let start = DateTime::parse_from_rfc3339("2024-11-01T23:00:00Z").unwrap();
/// let end = DateTime::parse_from_rfc3339("2024-11-02T07:00:00Z").unwrap();
/// assert_eq!(count_night_hours(&start, &end), 7);
///
/// let start = DateTime::parse_from_rfc3339("2024-11-01T21:30:00Z").unwrap();
/// let end = DateTime::parse_from_rfc3339("2024-11-01T22:30:00Z").unwrap();
/// assert_eq!(count_night_hours(&start, &end), 0);
/// ```
pub fn count_night_hours<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> u32 {
    let step = Duration::hours(1);
    let mut night_hours = 0;
    let mut sample = start.clone();

    while sample < *end {
        if is_night_hour(sample.hour()) {
            night_hours += 1;
        }
        sample = sample + step;
    }

    night_hours
}

/// Calculates the night-shift bonus line for an entry.
///
/// Returns `None` when no sampled hour falls in the night window.
pub fn night_shift_bonus(entry: &TimeEntry) -> EngineResult<Option<BonusLine>> {
    let night_hours = count_night_hours(&entry.start_time, &entry.end_time);
    if night_hours == 0 {
        return Ok(None);
    }

    let hours = Decimal::from(night_hours);
    let amount = checked_product(
        "night shift bonus",
        &[hours, entry.hourly_rate, NIGHT_SHIFT_BONUS_MULTIPLIER],
    )?;
    Ok(Some(BonusLine::with_hours(
        BonusCategory::NightShift,
        hours,
        amount,
    )))
}
