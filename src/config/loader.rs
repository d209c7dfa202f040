//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::calculation::LUNCH_BREAK_MINUTES;
use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceFilter;

use super::types::{AttendanceSettings, DepartmentsConfig, OrganisationMetadata, TimeSettings};

/// Loads and provides access to attendance settings.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the organisation, its time settings and
/// the department and designation catalogues.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organisation.yaml   # Organisation metadata
/// ├── departments.yaml    # Department and designation catalogues
/// └── time_settings.yaml  # Shift reference times
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Organisation: {}", loader.organisation().name);
///
/// let department = loader.get_department("Sewing").unwrap();
/// println!("Department: {}", department);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: AttendanceSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or an invalid `HH:MM` time
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organisation =
            Self::load_yaml::<OrganisationMetadata>(&path.join("organisation.yaml"))?;
        let catalogue = Self::load_yaml::<DepartmentsConfig>(&path.join("departments.yaml"))?;
        let time_settings = Self::load_yaml::<TimeSettings>(&path.join("time_settings.yaml"))?;

        match time_settings.lunch_minutes() {
            Some(LUNCH_BREAK_MINUTES) => {}
            configured => warn!(
                lunch_start = %time_settings.lunch_start_time,
                lunch_end = %time_settings.lunch_end_time,
                ?configured,
                deducted = LUNCH_BREAK_MINUTES,
                "Configured lunch window does not match the fixed lunch deduction"
            ),
        }

        debug!(
            path = %path.display(),
            organisation = %organisation.code,
            departments = catalogue.departments.len(),
            designations = catalogue.designations.len(),
            "Attendance configuration loaded"
        );

        Ok(Self {
            settings: AttendanceSettings {
                organisation,
                time_settings,
                departments: catalogue.departments,
                designations: catalogue.designations,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the aggregated settings.
    pub fn settings(&self) -> &AttendanceSettings {
        &self.settings
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &OrganisationMetadata {
        &self.settings.organisation
    }

    /// Returns the shift reference times.
    pub fn time_settings(&self) -> &TimeSettings {
        &self.settings.time_settings
    }

    /// Returns the department names in display order.
    pub fn departments(&self) -> &[String] {
        &self.settings.departments
    }

    /// Returns the designation names in display order.
    pub fn designations(&self) -> &[String] {
        &self.settings.designations
    }

    /// Gets a department by its exact name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// assert_eq!(loader.get_department("Cutting")?, "Cutting");
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn get_department(&self, name: &str) -> EngineResult<&str> {
        self.settings
            .departments
            .iter()
            .find(|d| *d == name)
            .map(String::as_str)
            .ok_or_else(|| EngineError::DepartmentNotFound {
                name: name.to_string(),
            })
    }

    /// Gets a designation by its exact name.
    pub fn get_designation(&self, name: &str) -> EngineResult<&str> {
        self.settings
            .designations
            .iter()
            .find(|d| *d == name)
            .map(String::as_str)
            .ok_or_else(|| EngineError::DesignationNotFound {
                name: name.to_string(),
            })
    }

    /// Checks that every named criterion of a filter exists in the catalogues.
    pub fn validate_filter(&self, filter: &AttendanceFilter) -> EngineResult<()> {
        if let Some(department) = &filter.department {
            self.get_department(department)?;
        }
        if let Some(designation) = &filter.designation {
            self.get_designation(designation)?;
        }
        Ok(())
    }
}
