//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for employee, attendance,
//! wage, role, and report administration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{USER_ID_HEADER, create_router};
pub use request::{AttendanceRequest, CalculateWageRequest, EmployeeRequest, RoleRequest};
pub use response::ApiError;
pub use state::AppState;
