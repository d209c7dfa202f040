//! Check-out rounding.
//!
//! The rounded check-out drops the minutes, except that a check-out in the
//! last five minutes of an hour counts as the next full hour.

use crate::models::TimeOfDay;

/// Minute from which a check-out rounds up to the next hour.
pub const ROUND_UP_FROM_MINUTE: u32 = 55;

/// Rounds a check-out to the hour.
///
/// Minutes 55-59 round up, everything else truncates. 23:55 and later wrap
/// to 00:00.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::rounded_check_out;
///
/// let round = |s: &str| rounded_check_out(s.parse().unwrap()).to_string();
///
/// assert_eq!(round("17:54"), "17:00");
/// assert_eq!(round("17:55"), "18:00");
/// assert_eq!(round("23:56"), "00:00");
/// ```
pub fn rounded_check_out(check_out: TimeOfDay) -> TimeOfDay {
    let hour = if check_out.minute() >= ROUND_UP_FROM_MINUTE {
        (check_out.hour() + 1) % 24
    } else {
        check_out.hour()
    };

    TimeOfDay::from_hm(hour as u16, 0)
}
