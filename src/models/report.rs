//! Daily attendance report models.
//!
//! This module contains the [`AttendanceFilter`] used to narrow a day's roster
//! and the [`DailyAttendanceReport`] built from it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, AttendanceResult, LevelOfWork};

/// Narrows a roster by department, designation and level of work.
///
/// A `None` criterion matches every record ("All").
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceFilter, AttendanceRecord, LevelOfWork};
///
/// let filter = AttendanceFilter {
///     level_of_work: Some(LevelOfWork::Worker),
///     ..AttendanceFilter::default()
/// };
/// let record = AttendanceRecord::new("EMP006", LevelOfWork::Worker, None, None);
/// assert!(filter.matches(&record));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceFilter {
    /// Department to keep.
    #[serde(default)]
    pub department: Option<String>,
    /// Designation to keep.
    #[serde(default)]
    pub designation: Option<String>,
    /// Level of work to keep.
    #[serde(default)]
    pub level_of_work: Option<LevelOfWork>,
}

impl AttendanceFilter {
    /// Returns true if the record satisfies every set criterion.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let department_ok = self
            .department
            .as_ref()
            .is_none_or(|d| record.department.as_ref() == Some(d));
        let designation_ok = self
            .designation
            .as_ref()
            .is_none_or(|d| record.designation.as_ref() == Some(d));
        let level_ok = self
            .level_of_work
            .is_none_or(|level| record.level_of_work == level);

        department_ok && designation_ok && level_ok
    }
}

/// One line of the daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The record as supplied.
    pub record: AttendanceRecord,
    /// Figures derived from the record.
    pub result: AttendanceResult,
    /// Working hours as "X Hours Y Minutes".
    pub working_hours_display: String,
    /// Overtime rounded to whole hours.
    pub overtime_display: String,
    /// Extra overtime rounded to whole hours.
    pub extra_overtime_display: String,
}

/// Headline counts and totals for a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Number of records after filtering.
    pub total_employees: usize,
    /// Records whose effective status is present.
    pub present: usize,
    /// Records whose effective status is absent.
    pub absent: usize,
    /// Absences with prior notice.
    pub informed: usize,
    /// Absences without notice.
    pub uninformed: usize,
    /// Check-ins after the accepted cutoff.
    pub late_logins: usize,
    /// Sum of working hours across all records.
    pub total_working_hours: Decimal,
    /// Sum of overtime across workers.
    pub total_overtime_hours: Decimal,
    /// Sum of extra overtime across workers.
    pub total_extra_overtime_hours: Decimal,
    /// Workers eligible for snacks.
    pub snacks_eligible: usize,
    /// Workers eligible for a night bill.
    pub night_bill_eligible: usize,
}

/// The filtered roster for a day with per-row results and a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendanceReport {
    /// The day the report covers.
    pub date: NaiveDate,
    /// The filter that was applied.
    pub filter: AttendanceFilter,
    /// One row per matching record, in input order.
    pub rows: Vec<AttendanceRow>,
    /// Totals over `rows`.
    pub summary: DailySummary,
}
