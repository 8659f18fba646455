//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing workers in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Represents whether an employee is available for new payroll entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Active employee; attendance and wage entries may be created.
    Active,
    /// Inactive employee; excluded from new attendance and wage entry
    /// but retained for history.
    Inactive,
}

/// Represents an employee subject to payroll administration.
///
/// Rates are flat per-day amounts in a single currency. The optional
/// `user_id` links the record to the authenticated principal that owns it;
/// an unlinked employee is admin-managed only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The owning principal's user id, if the employee has a login.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// The employee's display name.
    pub full_name: String,
    /// Contact email, if known.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number, if known.
    #[serde(default)]
    pub phone: Option<String>,
    /// Amount earned for a full day of attendance.
    pub daily_wage: Decimal,
    /// Amount earned per hour of overtime.
    pub overtime_rate: Decimal,
    /// Amount earned for a half day of attendance.
    pub half_day_rate: Decimal,
    /// Whether the employee accepts new payroll entries.
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee accepts new attendance and wage entries.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Validates the employee's fields.
    ///
    /// All three rates are monetary amounts and must be non-negative, and
    /// the display name must not be blank.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "full_name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        for (field, value) in [
            ("daily_wage", self.daily_wage),
            ("overtime_rate", self.overtime_rate),
            ("half_day_rate", self.half_day_rate),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidEmployee {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}
