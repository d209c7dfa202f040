//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the organisation's attendance settings from YAML files:
//! organisation metadata, the department and designation catalogues used to
//! validate report filters, and the shift reference times shown to clients.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded settings for: {}", config.organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceSettings, DepartmentsConfig, OrganisationMetadata, TimeSettings};
