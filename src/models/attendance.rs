//! Attendance record and result models.
//!
//! This module defines the [`AttendanceRecord`] input for one employee on one
//! day and the [`AttendanceResult`] derived from it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// The category of work an employee performs.
///
/// Only workers accrue overtime, extra overtime and the snacks and night
/// bill allowances. Any unrecognised level deserialises to [`LevelOfWork::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelOfWork {
    /// Production floor worker.
    Worker,
    /// Office or supervisory staff.
    Staff,
    /// Any other level; treated as not applicable for overtime-derived fields.
    #[serde(other)]
    Other,
}

impl LevelOfWork {
    /// Returns true for [`LevelOfWork::Worker`].
    pub fn is_worker(self) -> bool {
        self == LevelOfWork::Worker
    }
}

/// Roster status recorded against an employee for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterStatus {
    /// Attended.
    Present,
    /// Did not attend.
    Absent,
    /// Absent with prior notice.
    Informed,
    /// Absent without notice.
    Uninformed,
}

/// Direction of a fingerprint scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanKind {
    /// Scan on arrival.
    #[serde(rename = "Check In")]
    CheckIn,
    /// Scan on departure.
    #[serde(rename = "Check Out")]
    CheckOut,
}

/// A single scan captured by the attendance terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scan {
    /// When the scan happened.
    pub time: TimeOfDay,
    /// Whether the scan was a check-in or a check-out.
    #[serde(rename = "type")]
    pub kind: ScanKind,
}

/// One employee's attendance for one day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, LevelOfWork};
///
/// let record = AttendanceRecord::new(
///     "EMP007",
///     LevelOfWork::Worker,
///     Some("08:10".parse().unwrap()),
///     Some("20:00".parse().unwrap()),
/// );
/// assert!(!record.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The employee's level of work.
    pub level_of_work: LevelOfWork,
    /// First check-in of the day, if any.
    pub check_in: Option<TimeOfDay>,
    /// Final check-out of the day, if any.
    pub check_out: Option<TimeOfDay>,
    /// Display name of the employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Department the employee belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// The employee's designation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    /// Status recorded on the roster, overriding the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_status: Option<RosterStatus>,
    /// Raw terminal scans for the day.
    #[serde(default)]
    pub scans: Vec<Scan>,
}

impl AttendanceRecord {
    /// Creates a record with only the fields the calculation needs.
    pub fn new(
        employee_id: impl Into<String>,
        level_of_work: LevelOfWork,
        check_in: Option<TimeOfDay>,
        check_out: Option<TimeOfDay>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            level_of_work,
            check_in,
            check_out,
            name: None,
            department: None,
            designation: None,
            roster_status: None,
            scans: Vec::new(),
        }
    }

    /// Creates a record from the day's terminal scans.
    ///
    /// The check-in is the first `Check In` scan and the check-out is the
    /// last `Check Out` scan, in the order the terminal reported them.
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceRecord, LevelOfWork, Scan, ScanKind};
    ///
    /// let scans = vec![
    ///     Scan { time: "08:10".parse().unwrap(), kind: ScanKind::CheckIn },
    ///     Scan { time: "13:00".parse().unwrap(), kind: ScanKind::CheckOut },
    ///     Scan { time: "14:00".parse().unwrap(), kind: ScanKind::CheckIn },
    ///     Scan { time: "20:00".parse().unwrap(), kind: ScanKind::CheckOut },
    /// ];
    /// let record = AttendanceRecord::from_scans("EMP007", LevelOfWork::Worker, scans);
    ///
    /// assert_eq!(record.check_in.unwrap().to_string(), "08:10");
    /// assert_eq!(record.check_out.unwrap().to_string(), "20:00");
    /// assert_eq!(record.attendance_count(), 4);
    /// ```
    pub fn from_scans(
        employee_id: impl Into<String>,
        level_of_work: LevelOfWork,
        scans: Vec<Scan>,
    ) -> Self {
        let check_in = scans
            .iter()
            .find(|s| s.kind == ScanKind::CheckIn)
            .map(|s| s.time);
        let check_out = scans
            .iter()
            .rev()
            .find(|s| s.kind == ScanKind::CheckOut)
            .map(|s| s.time);

        Self {
            scans,
            ..Self::new(employee_id, level_of_work, check_in, check_out)
        }
    }

    /// Returns true when either the check-in or the check-out is missing.
    pub fn is_absent(&self) -> bool {
        self.check_in.is_none() || self.check_out.is_none()
    }

    /// Number of terminal scans recorded for the day.
    pub fn attendance_count(&self) -> usize {
        self.scans.len()
    }

    /// The roster status if one was recorded, otherwise derived from the check-in.
    pub fn effective_status(&self) -> RosterStatus {
        match (self.roster_status, self.check_in) {
            (Some(status), _) => status,
            (None, Some(_)) => RosterStatus::Present,
            (None, None) => RosterStatus::Absent,
        }
    }
}

/// Punctuality classification of a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckInStatus {
    /// Checked in at or before 08:00.
    #[serde(rename = "On-time")]
    OnTime,
    /// Checked in after 08:00 but no later than 08:05.
    Accepted,
    /// Checked in after 08:05.
    #[serde(rename = "Late Login")]
    LateLogin,
    /// No usable check-in/check-out pair.
    Absent,
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckInStatus::OnTime => "On-time",
            CheckInStatus::Accepted => "Accepted",
            CheckInStatus::LateLogin => "Late Login",
            CheckInStatus::Absent => "Absent",
        };
        f.write_str(label)
    }
}

/// Figures derived from one [`AttendanceRecord`].
///
/// Hour values carry one decimal place. The eligibility flags are `None`
/// when the employee is not a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResult {
    /// Hours between check-in and check-out less the lunch break.
    pub working_hours: Decimal,
    /// Hours worked between 17:00 and 19:00.
    pub overtime_hours: Decimal,
    /// Hours worked after 19:00.
    pub extra_overtime_hours: Decimal,
    /// Check-out rounded to the hour; `None` when there is no check-out.
    pub rounded_check_out: Option<TimeOfDay>,
    /// Punctuality of the check-in.
    pub check_in_status: CheckInStatus,
    /// Whether the worker earns a snacks allowance.
    pub snacks_eligible: Option<bool>,
    /// Whether the worker earns a night bill.
    pub night_bill_eligible: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn scan(time: &str, kind: ScanKind) -> Scan {
        Scan {
            time: t(time),
            kind,
        }
    }

    #[test]
    fn test_level_of_work_deserialization() {
        let worker: LevelOfWork = serde_json::from_str("\"Worker\"").unwrap();
        let staff: LevelOfWork = serde_json::from_str("\"Staff\"").unwrap();
        let other: LevelOfWork = serde_json::from_str("\"Manager\"").unwrap();

        assert_eq!(worker, LevelOfWork::Worker);
        assert_eq!(staff, LevelOfWork::Staff);
        assert_eq!(other, LevelOfWork::Other);
        assert!(worker.is_worker());
        assert!(!staff.is_worker());
        assert!(!other.is_worker());
    }

    #[test]
    fn test_check_in_status_serialization() {
        assert_eq!(
            serde_json::to_string(&CheckInStatus::OnTime).unwrap(),
            "\"On-time\""
        );
        assert_eq!(
            serde_json::to_string(&CheckInStatus::LateLogin).unwrap(),
            "\"Late Login\""
        );
        assert_eq!(
            serde_json::to_string(&CheckInStatus::Accepted).unwrap(),
            "\"Accepted\""
        );
        assert_eq!(
            serde_json::to_string(&CheckInStatus::Absent).unwrap(),
            "\"Absent\""
        );
    }

    #[test]
    fn test_check_in_status_display_matches_wire_label() {
        for status in [
            CheckInStatus::OnTime,
            CheckInStatus::Accepted,
            CheckInStatus::LateLogin,
            CheckInStatus::Absent,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_record_is_absent_when_either_time_missing() {
        let both =
            AttendanceRecord::new("E1", LevelOfWork::Worker, Some(t("08:00")), Some(t("17:00")));
        let no_out = AttendanceRecord::new("E1", LevelOfWork::Worker, Some(t("08:00")), None);
        let no_in = AttendanceRecord::new("E1", LevelOfWork::Worker, None, Some(t("17:00")));

        assert!(!both.is_absent());
        assert!(no_out.is_absent());
        assert!(no_in.is_absent());
    }

    #[test]
    fn test_from_scans_takes_first_in_and_last_out() {
        let record = AttendanceRecord::from_scans(
            "EMP004",
            LevelOfWork::Staff,
            vec![
                scan("08:45", ScanKind::CheckIn),
                scan("12:00", ScanKind::CheckOut),
                scan("19:30", ScanKind::CheckOut),
            ],
        );

        assert_eq!(record.check_in, Some(t("08:45")));
        assert_eq!(record.check_out, Some(t("19:30")));
        assert_eq!(record.attendance_count(), 3);
    }

    #[test]
    fn test_from_scans_without_checkout() {
        let record = AttendanceRecord::from_scans(
            "EMP011",
            LevelOfWork::Worker,
            vec![scan("08:02", ScanKind::CheckIn)],
        );

        assert_eq!(record.check_in, Some(t("08:02")));
        assert_eq!(record.check_out, None);
        assert!(record.is_absent());
    }

    #[test]
    fn test_effective_status() {
        let mut record = AttendanceRecord::new("E1", LevelOfWork::Worker, Some(t("08:00")), None);
        assert_eq!(record.effective_status(), RosterStatus::Present);

        record.check_in = None;
        assert_eq!(record.effective_status(), RosterStatus::Absent);

        record.roster_status = Some(RosterStatus::Informed);
        assert_eq!(record.effective_status(), RosterStatus::Informed);
    }

    #[test]
    fn test_record_deserialization_with_roster_fields() {
        let json = r#"{
            "employee_id": "EMP001",
            "level_of_work": "Worker",
            "check_in": "08:00",
            "check_out": "17:30",
            "name": "Ahmed Khan",
            "department": "Sewing",
            "designation": "Senior Tailor",
            "scans": [
                { "time": "08:00", "type": "Check In" },
                { "time": "17:30", "type": "Check Out" }
            ]
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "EMP001");
        assert_eq!(record.department.as_deref(), Some("Sewing"));
        assert_eq!(record.scans[1].kind, ScanKind::CheckOut);
        assert_eq!(record.roster_status, None);
    }

    #[test]
    fn test_record_deserialization_with_null_times() {
        let json = r#"{
            "employee_id": "EMP012",
            "level_of_work": "Staff",
            "check_in": null,
            "check_out": null,
            "roster_status": "Uninformed"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_absent());
        assert_eq!(record.effective_status(), RosterStatus::Uninformed);
        assert!(record.scans.is_empty());
    }
}
