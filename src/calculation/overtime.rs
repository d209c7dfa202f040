//! Standard overtime calculation.
//!
//! Overtime is the part of a worker's day that falls inside the 17:00-19:00
//! window, so it never exceeds two hours. Anything later is extra overtime.

use rust_decimal::Decimal;

use crate::models::TimeOfDay;

use super::clock::{minutes_to_hours, roll_to_next_day};

/// Start of the overtime window.
pub const OVERTIME_START: TimeOfDay = TimeOfDay::from_hm(17, 0);

/// End of the overtime window (inclusive).
pub const OVERTIME_END: TimeOfDay = TimeOfDay::from_hm(19, 0);

/// Maximum overtime credited for one day.
pub const OVERTIME_CAP_HOURS: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Calculates standard overtime from the check-out time.
///
/// Only meaningful for workers; callers gate on [`LevelOfWork`].
///
/// A check-out before 17:00 on the clock is read as the early hours of the
/// next day, which puts it past the window and earns the full cap.
///
/// # Returns
///
/// - `(check_out - 17:00) / 60` rounded to one decimal for 17:00-19:00
/// - [`OVERTIME_CAP_HOURS`] for anything later
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::overtime_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overtime_hours("17:30".parse().unwrap()), Decimal::new(5, 1));
/// assert_eq!(overtime_hours("20:00".parse().unwrap()), Decimal::new(20, 1));
/// assert_eq!(overtime_hours("02:00".parse().unwrap()), Decimal::new(20, 1));
/// ```
///
/// [`LevelOfWork`]: crate::models::LevelOfWork
pub fn overtime_hours(check_out: TimeOfDay) -> Decimal {
    let start = OVERTIME_START.minutes();
    let end = OVERTIME_END.minutes();
    let adjusted = roll_to_next_day(check_out.minutes(), start);

    if adjusted > end {
        return OVERTIME_CAP_HOURS;
    }

    minutes_to_hours(i64::from(adjusted.saturating_sub(start)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ot(check_out: &str) -> Decimal {
        overtime_hours(check_out.parse().unwrap())
    }

    #[test]
    fn test_window_start_is_zero() {
        assert_eq!(ot("17:00"), Decimal::ZERO);
    }

    #[test]
    fn test_inside_window() {
        assert_eq!(ot("17:15"), dec("0.3"));
        assert_eq!(ot("17:30"), dec("0.5"));
        assert_eq!(ot("18:00"), dec("1.0"));
        assert_eq!(ot("18:30"), dec("1.5"));
    }

    #[test]
    fn test_window_end_is_inclusive() {
        assert_eq!(ot("19:00"), dec("2.0"));
    }

    #[test]
    fn test_after_window_is_capped() {
        assert_eq!(ot("19:01"), OVERTIME_CAP_HOURS);
        assert_eq!(ot("19:30"), dec("2.0"));
        assert_eq!(ot("23:59"), dec("2.0"));
    }

    #[test]
    fn test_early_morning_check_out_is_next_day() {
        assert_eq!(ot("00:00"), dec("2.0"));
        assert_eq!(ot("02:00"), dec("2.0"));
    }

    #[test]
    fn test_check_out_before_window_reads_as_next_day() {
        // 16:45 rolls to 40:45, past the window.
        assert_eq!(ot("16:45"), dec("2.0"));
        assert_eq!(ot("16:59"), dec("2.0"));
    }

    #[test]
    fn test_cap_constant() {
        assert_eq!(OVERTIME_CAP_HOURS, dec("2.0"));
        assert_eq!(OVERTIME_CAP_HOURS.to_string(), "2.0");
    }

    #[test]
    fn test_window_constants() {
        assert_eq!(OVERTIME_START.minutes(), 1020);
        assert_eq!(OVERTIME_END.minutes(), 1140);
    }
}
