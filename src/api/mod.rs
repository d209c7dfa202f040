//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for evaluating attendance
//! records, building daily roster reports and reading the configured
//! attendance settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRecordRequest, DailyAttendanceRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
