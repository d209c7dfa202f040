//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the
//! `/attendance/calculate` and `/attendance/daily` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceFilter, AttendanceRecord, LevelOfWork, RosterStatus, Scan, TimeOfDay};

/// Request body for the `/attendance/calculate` endpoint, and one entry of a
/// daily roster.
///
/// The check-in and check-out may be given directly, or left out and derived
/// from the terminal `scans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The employee's level of work ("Worker" or "Staff").
    pub level_of_work: LevelOfWork,
    /// First check-in of the day as `HH:MM`.
    #[serde(default)]
    pub check_in: Option<TimeOfDay>,
    /// Final check-out of the day as `HH:MM`.
    #[serde(default)]
    pub check_out: Option<TimeOfDay>,
    /// Display name of the employee.
    #[serde(default)]
    pub name: Option<String>,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// The employee's designation.
    #[serde(default)]
    pub designation: Option<String>,
    /// Status recorded on the roster.
    #[serde(default)]
    pub roster_status: Option<RosterStatus>,
    /// Raw terminal scans for the day.
    #[serde(default)]
    pub scans: Vec<Scan>,
}

/// Request body for the `/attendance/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAttendanceRequest {
    /// The day the roster covers.
    pub date: NaiveDate,
    /// Optional narrowing of the roster. Omitted criteria match everyone.
    #[serde(default)]
    pub filter: AttendanceFilter,
    /// The day's roster.
    pub records: Vec<AttendanceRecordRequest>,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        let base = if req.check_in.is_none() && req.check_out.is_none() && !req.scans.is_empty() {
            AttendanceRecord::from_scans(req.employee_id, req.level_of_work, req.scans)
        } else {
            AttendanceRecord {
                scans: req.scans,
                ..AttendanceRecord::new(
                    req.employee_id,
                    req.level_of_work,
                    req.check_in,
                    req.check_out,
                )
            }
        };

        AttendanceRecord {
            name: req.name,
            department: req.department,
            designation: req.designation,
            roster_status: req.roster_status,
            ..base
        }
    }
}
