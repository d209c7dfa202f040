//! Extra overtime calculation.
//!
//! Extra overtime is every minute a worker stays past 19:00, with no cap.

use rust_decimal::Decimal;

use crate::models::TimeOfDay;

use super::clock::{minutes_to_hours, roll_to_next_day};

/// When extra overtime starts accruing.
pub const EXTRA_OVERTIME_START: TimeOfDay = TimeOfDay::from_hm(19, 0);

/// Returns true when the extra overtime rule reads `check_out` as the next day.
///
/// That happens for every check-out before 19:00 on the clock, including
/// ordinary afternoon check-outs that the working hours rule treats as
/// same-day.
pub fn extra_overtime_rolls_over(check_out: TimeOfDay) -> bool {
    check_out < EXTRA_OVERTIME_START
}

/// Calculates extra overtime from the check-out time.
///
/// Only meaningful for workers; callers gate on [`LevelOfWork`].
///
/// # Returns
///
/// `(check_out - 19:00) / 60` rounded to one decimal, after moving any
/// check-out earlier than 19:00 onto the next day; zero at exactly 19:00.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::extra_overtime_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(extra_overtime_hours("19:00".parse().unwrap()), Decimal::ZERO);
/// assert_eq!(extra_overtime_hours("20:00".parse().unwrap()), Decimal::new(10, 1));
/// assert_eq!(extra_overtime_hours("02:00".parse().unwrap()), Decimal::new(70, 1));
/// ```
///
/// [`LevelOfWork`]: crate::models::LevelOfWork
pub fn extra_overtime_hours(check_out: TimeOfDay) -> Decimal {
    let start = EXTRA_OVERTIME_START.minutes();
    let adjusted = roll_to_next_day(check_out.minutes(), start);

    minutes_to_hours(i64::from(adjusted.saturating_sub(start)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn extra(check_out: &str) -> Decimal {
        extra_overtime_hours(check_out.parse().unwrap())
    }

    #[test]
    fn test_at_start_is_zero() {
        assert_eq!(extra("19:00"), Decimal::ZERO);
    }

    #[test]
    fn test_after_start() {
        assert_eq!(extra("19:30"), dec("0.5"));
        assert_eq!(extra("20:00"), dec("1.0"));
        assert_eq!(extra("23:59"), dec("5.0"));
    }

    #[test]
    fn test_midnight_and_later() {
        assert_eq!(extra("00:00"), dec("5.0"));
        assert_eq!(extra("02:00"), dec("7.0"));
    }

    #[test]
    fn test_uncapped() {
        assert_eq!(extra("10:00"), dec("15.0"));
    }

    #[test]
    fn test_afternoon_check_out_reads_as_next_day() {
        // 17:30 rolls to 41:30, 22.5 hours past 19:00.
        assert_eq!(extra("17:30"), dec("22.5"));
        assert_eq!(extra("18:59"), dec("24.0"));
    }

    #[test]
    fn test_rolls_over() {
        assert!(extra_overtime_rolls_over("17:30".parse().unwrap()));
        assert!(extra_overtime_rolls_over("02:00".parse().unwrap()));
        assert!(!extra_overtime_rolls_over("19:00".parse().unwrap()));
        assert!(!extra_overtime_rolls_over("21:15".parse().unwrap()));
    }

    #[test]
    fn test_start_constant() {
        assert_eq!(EXTRA_OVERTIME_START.minutes(), 1140);
    }
}
