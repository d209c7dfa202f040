//! Snacks and night bill eligibility.
//!
//! Workers who stay long enough past 19:00 earn a snacks allowance, and a
//! night bill on top of that for very late nights. Neither applies to
//! other levels of work.

use rust_decimal::Decimal;

use crate::models::LevelOfWork;

/// Extra overtime needed for the snacks allowance.
pub const SNACKS_THRESHOLD_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Extra overtime needed for the night bill.
pub const NIGHT_BILL_THRESHOLD_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

fn worker_threshold(
    level_of_work: LevelOfWork,
    extra_overtime: Decimal,
    threshold: Decimal,
) -> Option<bool> {
    level_of_work
        .is_worker()
        .then_some(extra_overtime >= threshold)
}

/// Whether a worker earns the snacks allowance.
///
/// Returns `None` for anyone who is not a worker.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::snacks_eligible;
/// use attendance_engine::models::LevelOfWork;
/// use rust_decimal::Decimal;
///
/// assert_eq!(snacks_eligible(LevelOfWork::Worker, Decimal::new(9, 1)), Some(false));
/// assert_eq!(snacks_eligible(LevelOfWork::Worker, Decimal::new(10, 1)), Some(true));
/// assert_eq!(snacks_eligible(LevelOfWork::Staff, Decimal::new(30, 1)), None);
/// ```
pub fn snacks_eligible(level_of_work: LevelOfWork, extra_overtime: Decimal) -> Option<bool> {
    worker_threshold(level_of_work, extra_overtime, SNACKS_THRESHOLD_HOURS)
}

/// Whether a worker earns the night bill.
///
/// Returns `None` for anyone who is not a worker.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::night_bill_eligible;
/// use attendance_engine::models::LevelOfWork;
/// use rust_decimal::Decimal;
///
/// assert_eq!(night_bill_eligible(LevelOfWork::Worker, Decimal::new(49, 1)), Some(false));
/// assert_eq!(night_bill_eligible(LevelOfWork::Worker, Decimal::new(50, 1)), Some(true));
/// assert_eq!(night_bill_eligible(LevelOfWork::Staff, Decimal::new(70, 1)), None);
/// ```
pub fn night_bill_eligible(level_of_work: LevelOfWork, extra_overtime: Decimal) -> Option<bool> {
    worker_threshold(level_of_work, extra_overtime, NIGHT_BILL_THRESHOLD_HOURS)
}
