//! Check-in punctuality.

use crate::models::{CheckInStatus, TimeOfDay};

/// Latest check-in that counts as on time.
pub const ON_TIME_CUTOFF: TimeOfDay = TimeOfDay::from_hm(8, 0);

/// Latest check-in that is still accepted.
pub const ACCEPTED_CUTOFF: TimeOfDay = TimeOfDay::from_hm(8, 5);

/// Classifies a check-in against the on-time and accepted cutoffs.
///
/// Both cutoffs are inclusive. A missing check-in is [`CheckInStatus::Absent`].
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::check_in_status;
/// use attendance_engine::models::CheckInStatus;
///
/// assert_eq!(check_in_status(Some("08:00".parse().unwrap())), CheckInStatus::OnTime);
/// assert_eq!(check_in_status(Some("08:05".parse().unwrap())), CheckInStatus::Accepted);
/// assert_eq!(check_in_status(Some("08:06".parse().unwrap())), CheckInStatus::LateLogin);
/// assert_eq!(check_in_status(None), CheckInStatus::Absent);
/// ```
pub fn check_in_status(check_in: Option<TimeOfDay>) -> CheckInStatus {
    match check_in {
        None => CheckInStatus::Absent,
        Some(time) if time <= ON_TIME_CUTOFF => CheckInStatus::OnTime,
        Some(time) if time <= ACCEPTED_CUTOFF => CheckInStatus::Accepted,
        Some(_) => CheckInStatus::LateLogin,
    }
}
