//! Daily roster report.
//!
//! Applies an [`AttendanceFilter`] to a day's records, evaluates each one and
//! totals the results the way the attendance dashboard presents them.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    AttendanceFilter, AttendanceRecord, AttendanceRow, CheckInStatus, DailyAttendanceReport,
    DailySummary, RosterStatus,
};

use super::check_in_status::check_in_status;
use super::daily_attendance::calculate_attendance;
use super::formatting::{format_overtime, format_working_hours};

/// Totals a set of evaluated rows.
///
/// Overtime totals only include workers; working hours include everyone.
/// Late logins are judged on the check-in alone, so a late employee who has
/// not checked out yet still counts.
pub fn summarize(rows: &[AttendanceRow]) -> DailySummary {
    let mut summary = DailySummary {
        total_employees: rows.len(),
        ..DailySummary::default()
    };

    for row in rows {
        match row.record.effective_status() {
            RosterStatus::Present => summary.present += 1,
            RosterStatus::Absent => summary.absent += 1,
            RosterStatus::Informed => summary.informed += 1,
            RosterStatus::Uninformed => summary.uninformed += 1,
        }

        let late = row
            .record
            .check_in
            .is_some_and(|t| check_in_status(Some(t)) == CheckInStatus::LateLogin);
        if late {
            summary.late_logins += 1;
        }

        summary.total_working_hours += row.result.working_hours;

        if row.record.level_of_work.is_worker() {
            summary.total_overtime_hours += row.result.overtime_hours;
            summary.total_extra_overtime_hours += row.result.extra_overtime_hours;
        }

        if row.result.snacks_eligible == Some(true) {
            summary.snacks_eligible += 1;
        }
        if row.result.night_bill_eligible == Some(true) {
            summary.night_bill_eligible += 1;
        }
    }

    summary
}

/// Builds the report for one day.
///
/// Rows keep the input order of the records that pass `filter`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::build_daily_report;
/// use attendance_engine::models::{AttendanceFilter, AttendanceRecord, LevelOfWork};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     AttendanceRecord::new("EMP007", LevelOfWork::Worker,
///         Some("08:10".parse().unwrap()), Some("20:00".parse().unwrap())),
///     AttendanceRecord::new("EMP002", LevelOfWork::Staff,
///         Some("08:00".parse().unwrap()), Some("18:00".parse().unwrap())),
/// ];
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let report = build_daily_report(date, &records, &AttendanceFilter::default());
///
/// assert_eq!(report.summary.total_employees, 2);
/// assert_eq!(report.summary.total_working_hours, Decimal::new(198, 1));
/// assert_eq!(report.summary.snacks_eligible, 1);
/// ```
pub fn build_daily_report(
    date: NaiveDate,
    records: &[AttendanceRecord],
    filter: &AttendanceFilter,
) -> DailyAttendanceReport {
    let rows: Vec<AttendanceRow> = records
        .iter()
        .filter(|record| filter.matches(record))
        .map(|record| {
            let result = calculate_attendance(record);
            AttendanceRow {
                working_hours_display: format_working_hours(result.working_hours),
                overtime_display: format_overtime(result.overtime_hours),
                extra_overtime_display: format_overtime(result.extra_overtime_hours),
                record: record.clone(),
                result,
            }
        })
        .collect();

    let summary = summarize(&rows);

    debug!(
        %date,
        records = records.len(),
        matched = rows.len(),
        total_working_hours = %summary.total_working_hours,
        "Daily attendance report built"
    );

    DailyAttendanceReport {
        date,
        filter: filter.clone(),
        rows,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LevelOfWork, TimeOfDay};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn employee(
        id: &str,
        department: &str,
        designation: &str,
        level: LevelOfWork,
        check_in: Option<&str>,
        check_out: Option<&str>,
    ) -> AttendanceRecord {
        let mut record = AttendanceRecord::new(id, level, check_in.map(t), check_out.map(t));
        record.department = Some(department.to_string());
        record.designation = Some(designation.to_string());
        record
    }

    fn roster() -> Vec<AttendanceRecord> {
        use LevelOfWork::{Staff, Worker};

        vec![
            employee(
                "EMP002",
                "Quality Control",
                "Quality Inspector",
                Staff,
                Some("08:00"),
                Some("18:00"),
            ),
            employee("EMP003", "Cutting", "Cutting Master", Worker, Some("08:30"), Some("17:00")),
            employee("EMP007", "Sewing", "Machine Operator", Worker, Some("08:10"), Some("20:00")),
            employee(
                "EMP010",
                "Quality Control",
                "Quality Assistant",
                Worker,
                Some("08:00"),
                Some("02:00"),
            ),
            employee("EMP011", "Sewing", "Junior Tailor", Worker, None, None),
        ]
    }

    #[test]
    fn test_report_rows_follow_input_order() {
        let report = build_daily_report(date(), &roster(), &AttendanceFilter::default());

        let ids: Vec<&str> = report.rows.iter().map(|r| r.record.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP002", "EMP003", "EMP007", "EMP010", "EMP011"]);
        assert_eq!(report.date, date());
    }

    #[test]
    fn test_summary_counts() {
        let report = build_daily_report(date(), &roster(), &AttendanceFilter::default());
        let summary = &report.summary;

        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.present, 4);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.informed, 0);
        assert_eq!(summary.uninformed, 0);
        // EMP003 (08:30) and EMP007 (08:10)
        assert_eq!(summary.late_logins, 2);
    }

    #[test]
    fn test_summary_totals() {
        let report = build_daily_report(date(), &roster(), &AttendanceFilter::default());
        let summary = &report.summary;

        // 9.0 + 7.5 + 10.8 + 17.0 + 0
        assert_eq!(summary.total_working_hours, dec("44.3"));
        // EMP003 17:00 -> 0, EMP007 -> 2.0, EMP010 -> 2.0; staff excluded
        assert_eq!(summary.total_overtime_hours, dec("4.0"));
        // EMP003 17:00 rolls to next day -> 22.0, EMP007 -> 1.0, EMP010 -> 7.0
        assert_eq!(summary.total_extra_overtime_hours, dec("30.0"));
        assert_eq!(summary.snacks_eligible, 3);
        assert_eq!(summary.night_bill_eligible, 2);
    }

    #[test]
    fn test_filter_by_level_of_work() {
        let filter = AttendanceFilter {
            level_of_work: Some(LevelOfWork::Staff),
            ..AttendanceFilter::default()
        };
        let report = build_daily_report(date(), &roster(), &filter);

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].record.employee_id, "EMP002");
        assert_eq!(report.summary.total_overtime_hours, Decimal::ZERO);
        assert_eq!(report.summary.snacks_eligible, 0);
    }

    #[test]
    fn test_filter_by_department() {
        let filter = AttendanceFilter {
            department: Some("Sewing".to_string()),
            ..AttendanceFilter::default()
        };
        let report = build_daily_report(date(), &roster(), &filter);

        assert_eq!(report.summary.total_employees, 2);
        assert_eq!(report.summary.absent, 1);
        assert_eq!(report.filter, filter);
    }

    #[test]
    fn test_roster_status_overrides_derived_status() {
        let mut records = roster();
        records[4].roster_status = Some(RosterStatus::Informed);

        let report = build_daily_report(date(), &records, &AttendanceFilter::default());
        assert_eq!(report.summary.absent, 0);
        assert_eq!(report.summary.informed, 1);
    }

    #[test]
    fn test_row_display_strings() {
        let report = build_daily_report(date(), &roster(), &AttendanceFilter::default());
        let row = &report.rows[2];

        assert_eq!(row.working_hours_display, "10 Hours 48 Minutes");
        assert_eq!(row.overtime_display, "2 Hours");
        assert_eq!(row.extra_overtime_display, "1 Hour");
    }

    #[test]
    fn test_late_login_counted_before_check_out() {
        let records = vec![employee(
            "EMP012",
            "Cutting",
            "Cutting Master",
            LevelOfWork::Worker,
            Some("08:30"),
            None,
        )];
        let report = build_daily_report(date(), &records, &AttendanceFilter::default());

        // The row itself stays absent until the check-out is recorded
        assert_eq!(report.rows[0].result.check_in_status, CheckInStatus::Absent);
        assert_eq!(report.summary.present, 1);
        assert_eq!(report.summary.late_logins, 1);
        assert_eq!(report.summary.total_working_hours, Decimal::ZERO);
    }

    #[test]
    fn test_on_time_check_in_without_check_out_is_not_late() {
        let records = vec![employee(
            "EMP013",
            "Sewing",
            "Junior Tailor",
            LevelOfWork::Worker,
            Some("08:04"),
            None,
        )];
        let report = build_daily_report(date(), &records, &AttendanceFilter::default());

        assert_eq!(report.summary.present, 1);
        assert_eq!(report.summary.late_logins, 0);
    }

    #[test]
    fn test_empty_roster() {
        let report = build_daily_report(date(), &[], &AttendanceFilter::default());

        assert!(report.rows.is_empty());
        assert_eq!(report.summary, DailySummary::default());
    }
}
