//! Attendance record model and related types.
//!
//! Attendance is captured once per employee per calendar day; the storage
//! layer enforces the (employee, date) uniqueness constraint. Records are
//! immutable once inserted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// The attendance status for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for a full day; earns the daily wage.
    Present,
    /// Absent; earns nothing for the day.
    Absent,
    /// Present for a half day; earns the half-day rate.
    HalfDay,
}

/// A single day's attendance entry for one employee.
///
/// Overtime hours and advances are recorded independently of the day's
/// status: an absent employee can still have taken an advance, and a
/// half day can still carry overtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Overtime worked on the day, in hours.
    pub overtime_hours: Decimal,
    /// Monetary advance paid out on the day, deducted at wage settlement.
    pub advance_taken: Decimal,
    /// Optional free-text note.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Validates the record's fields.
    ///
    /// Overtime hours and advance amounts must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                field: "overtime_hours".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.advance_taken < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                field: "advance_taken".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
