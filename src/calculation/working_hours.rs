//! Working hours calculation.
//!
//! Working hours are the time between check-in and check-out less a fixed
//! lunch break. A check-out earlier on the clock than the check-in is an
//! overnight shift ending the next day.

use rust_decimal::Decimal;

use crate::models::TimeOfDay;

use super::clock::{minutes_to_hours, roll_to_next_day};

/// Fixed unpaid lunch break deducted from every shift, in minutes.
pub const LUNCH_BREAK_MINUTES: u32 = 60;

/// Calculates the hours worked between check-in and check-out.
///
/// # Arguments
///
/// * `check_in` - When the employee arrived
/// * `check_out` - When the employee left; taken as the next day if it is
///   earlier than `check_in`
///
/// # Returns
///
/// `(check_out - check_in - lunch) / 60` rounded to one decimal place, never
/// negative. A shift shorter than the lunch break yields zero.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::working_hours;
/// use rust_decimal::Decimal;
///
/// let day = working_hours("08:10".parse().unwrap(), "20:00".parse().unwrap());
/// assert_eq!(day, Decimal::new(108, 1));
///
/// // Overnight: 08:00 until 02:00 the next morning.
/// let night = working_hours("08:00".parse().unwrap(), "02:00".parse().unwrap());
/// assert_eq!(night, Decimal::new(170, 1));
/// ```
pub fn working_hours(check_in: TimeOfDay, check_out: TimeOfDay) -> Decimal {
    let start = check_in.minutes();
    let end = roll_to_next_day(check_out.minutes(), start);

    let worked_minutes = i64::from(end - start) - i64::from(LUNCH_BREAK_MINUTES);

    minutes_to_hours(worked_minutes).max(Decimal::ZERO)
}
