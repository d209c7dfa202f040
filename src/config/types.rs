//! Configuration types for attendance settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::TimeOfDay;

/// Metadata about the organisation the roster belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationMetadata {
    /// Short organisation code (e.g., "GARMENTS-01").
    pub code: String,
    /// The human-readable organisation name.
    pub name: String,
}

/// Departments configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentsConfig {
    /// Department names, in display order.
    pub departments: Vec<String>,
    /// Designation names, in display order.
    pub designations: Vec<String>,
}

/// Shift reference times shown to clients.
///
/// These are informational. The calculation rules use fixed policy
/// constants and are not affected by changes here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    /// Latest check-in that still counts as on time.
    pub safe_entry_time: TimeOfDay,
    /// Start of the lunch break.
    pub lunch_start_time: TimeOfDay,
    /// End of the lunch break.
    pub lunch_end_time: TimeOfDay,
    /// End of the regular shift, where overtime begins.
    pub safe_exit_time: TimeOfDay,
}

impl TimeSettings {
    /// Length of the configured lunch window in minutes.
    ///
    /// Returns `None` when the window ends before it starts.
    pub fn lunch_minutes(&self) -> Option<u32> {
        self.lunch_end_time
            .minutes()
            .checked_sub(self.lunch_start_time.minutes())
    }
}

/// Complete attendance configuration.
///
/// This is the aggregate of all loaded configuration files and is what
/// `GET /settings` returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSettings {
    /// Organisation metadata.
    pub organisation: OrganisationMetadata,
    /// Shift reference times.
    pub time_settings: TimeSettings,
    /// Department names.
    pub departments: Vec<String>,
    /// Designation names.
    pub designations: Vec<String>,
}
