//! Calculation logic for the Attendance Engine.
//!
//! This module contains the time-accounting rules (working hours, overtime,
//! extra overtime, check-out rounding, check-in status, and the snacks and
//! night bill allowances), their composition into a per-employee result with
//! an audit trace, and the daily roster report.
//!
//! Every rule is a pure function over [`TimeOfDay`](crate::models::TimeOfDay)
//! values with no shared state.

mod allowances;
mod check_in_status;
mod clock;
mod daily_attendance;
mod daily_report;
mod extra_overtime;
mod formatting;
mod overtime;
mod rounded_check_out;
mod working_hours;

pub use allowances::{
    NIGHT_BILL_THRESHOLD_HOURS, SNACKS_THRESHOLD_HOURS, night_bill_eligible, snacks_eligible,
};
pub use check_in_status::{ACCEPTED_CUTOFF, ON_TIME_CUTOFF, check_in_status};
pub use daily_attendance::{audit_attendance, calculate_attendance};
pub use daily_report::{build_daily_report, summarize};
pub use extra_overtime::{EXTRA_OVERTIME_START, extra_overtime_hours, extra_overtime_rolls_over};
pub use formatting::{format_overtime, format_working_hours};
pub use overtime::{OVERTIME_CAP_HOURS, OVERTIME_END, OVERTIME_START, overtime_hours};
pub use rounded_check_out::{ROUND_UP_FROM_MINUTE, rounded_check_out};
pub use working_hours::{LUNCH_BREAK_MINUTES, working_hours};
