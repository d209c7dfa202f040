//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod report;
mod time_of_day;

pub use attendance::{
    AttendanceRecord, AttendanceResult, CheckInStatus, LevelOfWork, RosterStatus, Scan, ScanKind,
};
pub use calculation_result::{AttendanceCalculation, AuditStep, AuditTrace, AuditWarning};
pub use report::{AttendanceFilter, AttendanceRow, DailyAttendanceReport, DailySummary};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
