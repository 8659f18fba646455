//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll administration.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let error = EngineError::EmployeeNotFound { id };
/// assert_eq!(
///     error.to_string(),
///     format!("Employee not found: {}", id)
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced employee does not exist or is not visible to the caller.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: Uuid,
    },

    /// The referenced wage record does not exist or is not visible to the caller.
    #[error("Wage record not found: {id}")]
    WageNotFound {
        /// The wage record id that was not found.
        id: Uuid,
    },

    /// A pay period was malformed (start after end).
    #[error("Invalid pay period: start {start} is after end {end}")]
    InvalidPeriod {
        /// The requested period start.
        start: NaiveDate,
        /// The requested period end.
        end: NaiveDate,
    },

    /// An employee record contained invalid data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record contained invalid data.
    #[error("Invalid attendance field '{field}': {message}")]
    InvalidAttendance {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Attendance was already captured for the employee on the given date.
    ///
    /// The uniqueness constraint on (employee, date) rejects the second
    /// insert; the first record remains intact.
    #[error("Attendance already exists for employee {employee_id} on {date}")]
    DuplicateAttendance {
        /// The employee the duplicate insert targeted.
        employee_id: Uuid,
        /// The date the duplicate insert targeted.
        date: NaiveDate,
    },

    /// The role was already assigned to the user.
    #[error("Role '{role}' already assigned to user {user_id}")]
    DuplicateRole {
        /// The user the duplicate assignment targeted.
        user_id: Uuid,
        /// The role name.
        role: String,
    },

    /// The policy model rejected the operation for the acting principal.
    #[error("Permission denied: {operation} on {entity}")]
    AuthorizationDenied {
        /// The entity the operation targeted (e.g. "employees").
        entity: String,
        /// The rejected operation (e.g. "insert").
        operation: String,
    },

    /// A retryable storage failure.
    #[error("Transient storage error: {message}")]
    TransientStorage {
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true if the error is retryable by the caller.
    ///
    /// Validation, authorization, and constraint errors are terminal for
    /// the request; only storage-level failures are worth retrying. The
    /// engine itself never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::TransientStorage { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
