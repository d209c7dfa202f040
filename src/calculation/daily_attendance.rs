//! Attendance evaluation for one employee on one day.
//!
//! This module composes the individual rules into an [`AttendanceResult`],
//! and can record every decision in an [`AuditTrace`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    AttendanceCalculation, AttendanceRecord, AttendanceResult, AuditStep, AuditTrace,
    AuditWarning, CheckInStatus, TimeOfDay,
};

use super::allowances::{
    NIGHT_BILL_THRESHOLD_HOURS, SNACKS_THRESHOLD_HOURS, night_bill_eligible, snacks_eligible,
};
use super::check_in_status::check_in_status;
use super::extra_overtime::{extra_overtime_hours, extra_overtime_rolls_over};
use super::overtime::overtime_hours;
use super::rounded_check_out::rounded_check_out;
use super::working_hours::{LUNCH_BREAK_MINUTES, working_hours};

/// Derives the attendance figures for a record.
///
/// - A record missing either time is absent: every duration is zero and the
///   status is [`CheckInStatus::Absent`].
/// - Overtime and extra overtime accrue only to workers.
/// - The rounded check-out is reported whenever a check-out exists.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_attendance;
/// use attendance_engine::models::{AttendanceRecord, CheckInStatus, LevelOfWork};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord::new(
///     "EMP007",
///     LevelOfWork::Worker,
///     Some("08:10".parse().unwrap()),
///     Some("20:00".parse().unwrap()),
/// );
/// let result = calculate_attendance(&record);
///
/// assert_eq!(result.working_hours, Decimal::new(108, 1));
/// assert_eq!(result.overtime_hours, Decimal::new(20, 1));
/// assert_eq!(result.extra_overtime_hours, Decimal::new(10, 1));
/// assert_eq!(result.check_in_status, CheckInStatus::LateLogin);
/// assert_eq!(result.snacks_eligible, Some(true));
/// assert_eq!(result.night_bill_eligible, Some(false));
/// ```
pub fn calculate_attendance(record: &AttendanceRecord) -> AttendanceResult {
    let level = record.level_of_work;
    let rounded = record.check_out.map(rounded_check_out);

    let (working, overtime, extra, status) = match (record.check_in, record.check_out) {
        (Some(check_in), Some(check_out)) => {
            let working = working_hours(check_in, check_out);
            let (overtime, extra) = if level.is_worker() {
                (overtime_hours(check_out), extra_overtime_hours(check_out))
            } else {
                (Decimal::ZERO, Decimal::ZERO)
            };
            (working, overtime, extra, check_in_status(Some(check_in)))
        }
        _ => (
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            CheckInStatus::Absent,
        ),
    };

    AttendanceResult {
        working_hours: working,
        overtime_hours: overtime,
        extra_overtime_hours: extra,
        rounded_check_out: rounded,
        check_in_status: status,
        snacks_eligible: snacks_eligible(level, extra),
        night_bill_eligible: night_bill_eligible(level, extra),
    }
}

fn time_json(time: Option<TimeOfDay>) -> serde_json::Value {
    time.map_or(serde_json::Value::Null, |t| serde_json::json!(t.to_string()))
}

fn optional_flag(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "eligible",
        Some(false) => "not eligible",
        None => "not applicable",
    }
}

fn audit_steps(record: &AttendanceRecord, result: &AttendanceResult) -> Vec<AuditStep> {
    let check_in = time_json(record.check_in);
    let check_out = time_json(record.check_out);
    let level = serde_json::json!(record.level_of_work);
    let absent = record.is_absent();

    let status_reasoning = match result.check_in_status {
        CheckInStatus::Absent => "Check-in or check-out missing, recorded as absent".to_string(),
        status => format!(
            "Check-in at {} classified as {} against the 08:00 on-time and 08:05 accepted cutoffs",
            record.check_in.map(|t| t.to_string()).unwrap_or_default(),
            status
        ),
    };

    let working_reasoning = if absent {
        "No working hours without both check-in and check-out".to_string()
    } else {
        format!(
            "{} to {} less {} minute lunch = {} hours",
            record.check_in.map(|t| t.to_string()).unwrap_or_default(),
            record.check_out.map(|t| t.to_string()).unwrap_or_default(),
            LUNCH_BREAK_MINUTES,
            result.working_hours.normalize()
        )
    };

    let overtime_reasoning = if absent {
        "No overtime without both check-in and check-out".to_string()
    } else if !record.level_of_work.is_worker() {
        "Overtime applies to workers only".to_string()
    } else {
        format!(
            "Check-out {} gives {} hours in the 17:00-19:00 window (capped at 2)",
            record.check_out.map(|t| t.to_string()).unwrap_or_default(),
            result.overtime_hours.normalize()
        )
    };

    let extra_reasoning = if absent {
        "No extra overtime without both check-in and check-out".to_string()
    } else if !record.level_of_work.is_worker() {
        "Extra overtime applies to workers only".to_string()
    } else {
        format!(
            "Check-out {} gives {} hours after 19:00",
            record.check_out.map(|t| t.to_string()).unwrap_or_default(),
            result.extra_overtime_hours.normalize()
        )
    };

    let rounded_reasoning = match (record.check_out, result.rounded_check_out) {
        (Some(out), Some(rounded)) => format!(
            "{} rounded to {} (minutes of 55 or more round up)",
            out, rounded
        ),
        _ => "No check-out to round".to_string(),
    };

    vec![
        AuditStep {
            step_number: 1,
            rule_id: "check_in_status".to_string(),
            rule_name: "Check-in Status".to_string(),
            input: serde_json::json!({ "check_in": check_in, "check_out": check_out }),
            output: serde_json::json!({ "status": result.check_in_status }),
            reasoning: status_reasoning,
        },
        AuditStep {
            step_number: 2,
            rule_id: "working_hours".to_string(),
            rule_name: "Working Hours".to_string(),
            input: serde_json::json!({
                "check_in": check_in,
                "check_out": check_out,
                "lunch_break_minutes": LUNCH_BREAK_MINUTES
            }),
            output: serde_json::json!({
                "working_hours": result.working_hours.to_string()
            }),
            reasoning: working_reasoning,
        },
        AuditStep {
            step_number: 3,
            rule_id: "overtime".to_string(),
            rule_name: "Overtime".to_string(),
            input: serde_json::json!({ "check_out": check_out, "level_of_work": level }),
            output: serde_json::json!({
                "overtime_hours": result.overtime_hours.to_string()
            }),
            reasoning: overtime_reasoning,
        },
        AuditStep {
            step_number: 4,
            rule_id: "extra_overtime".to_string(),
            rule_name: "Extra Overtime".to_string(),
            input: serde_json::json!({ "check_out": check_out, "level_of_work": level }),
            output: serde_json::json!({
                "extra_overtime_hours": result.extra_overtime_hours.to_string()
            }),
            reasoning: extra_reasoning,
        },
        AuditStep {
            step_number: 5,
            rule_id: "rounded_check_out".to_string(),
            rule_name: "Rounded Check-out".to_string(),
            input: serde_json::json!({ "check_out": check_out }),
            output: serde_json::json!({ "rounded_check_out": time_json(result.rounded_check_out) }),
            reasoning: rounded_reasoning,
        },
        AuditStep {
            step_number: 6,
            rule_id: "snacks_allowance".to_string(),
            rule_name: "Snacks Allowance".to_string(),
            input: serde_json::json!({
                "level_of_work": level,
                "extra_overtime_hours": result.extra_overtime_hours.to_string(),
                "threshold": SNACKS_THRESHOLD_HOURS.to_string()
            }),
            output: serde_json::json!({ "eligible": result.snacks_eligible }),
            reasoning: format!("Snacks allowance {}", optional_flag(result.snacks_eligible)),
        },
        AuditStep {
            step_number: 7,
            rule_id: "night_bill".to_string(),
            rule_name: "Night Bill".to_string(),
            input: serde_json::json!({
                "level_of_work": level,
                "extra_overtime_hours": result.extra_overtime_hours.to_string(),
                "threshold": NIGHT_BILL_THRESHOLD_HOURS.to_string()
            }),
            output: serde_json::json!({ "eligible": result.night_bill_eligible }),
            reasoning: format!("Night bill {}", optional_flag(result.night_bill_eligible)),
        },
    ]
}

fn audit_warnings(record: &AttendanceRecord) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    match (record.check_in, record.check_out) {
        (Some(check_in), Some(check_out)) => {
            // Working hours only roll over when check-out precedes check-in;
            // extra overtime rolls over for anything before 19:00.
            if record.level_of_work.is_worker()
                && check_out >= check_in
                && extra_overtime_rolls_over(check_out)
            {
                warnings.push(AuditWarning {
                    code: "NEXT_DAY_CHECKOUT".to_string(),
                    message: format!(
                        "Check-out {} is same-day for working hours, next-day for extra overtime",
                        check_out
                    ),
                    severity: "medium".to_string(),
                });
            }
        }
        (Some(_), None) => warnings.push(AuditWarning {
            code: "MISSING_CHECK_OUT".to_string(),
            message: "Check-in recorded without a check-out".to_string(),
            severity: "low".to_string(),
        }),
        (None, Some(_)) => warnings.push(AuditWarning {
            code: "MISSING_CHECK_IN".to_string(),
            message: "Check-out recorded without a check-in".to_string(),
            severity: "low".to_string(),
        }),
        (None, None) => {}
    }

    warnings
}

/// Derives the attendance figures for a record together with an audit trace.
///
/// The trace holds one step per rule in evaluation order and warnings for
/// inputs that deserve a second look:
///
/// - `NEXT_DAY_CHECKOUT`: a worker's check-out before 19:00 that the working
///   hours rule reads as same-day but the extra overtime rule reads as the
///   next day
/// - `MISSING_CHECK_OUT` / `MISSING_CHECK_IN`: half a punch pair
pub fn audit_attendance(record: &AttendanceRecord) -> AttendanceCalculation {
    let started = Instant::now();

    let result = calculate_attendance(record);
    let steps = audit_steps(record, &result);
    let warnings = audit_warnings(record);

    debug!(
        employee_id = %record.employee_id,
        status = %result.check_in_status,
        working_hours = %result.working_hours,
        warnings = warnings.len(),
        "Attendance evaluated"
    );

    AttendanceCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: record.employee_id.clone(),
        result,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: started.elapsed().as_micros() as u64,
        },
    }
}
