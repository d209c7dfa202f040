//! Minute arithmetic shared by the duration rules.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::MINUTES_PER_DAY;

/// Moves a clock reading onto the following day when it falls before `threshold`.
///
/// Every duration rule decides "is this check-out actually tomorrow?" by
/// comparing against its own threshold: the check-in for working hours, 17:00
/// for overtime and 19:00 for extra overtime.
pub(crate) fn roll_to_next_day(minutes: u32, threshold: u32) -> u32 {
    if minutes < threshold {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    }
}

/// Converts a signed minute count to hours rounded to one decimal place.
///
/// Midpoints round away from zero, which for the non-negative durations the
/// rules produce is the same as rounding half up.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
