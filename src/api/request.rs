//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the CRUD and
//! calculation endpoints. Row ids are server-generated, so the request
//! types carry everything but the id and convert into domain rows once
//! the handler has allocated one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    AttendanceRecord, AttendanceStatus, CalculationType, Employee, EmployeeStatus, Role,
};

/// Request body for creating or replacing an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
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
    #[serde(default = "default_status")]
    pub status: EmployeeStatus,
}

fn default_status() -> EmployeeStatus {
    EmployeeStatus::Active
}

impl EmployeeRequest {
    /// Converts the request into an employee row under the given id.
    pub fn into_employee(self, id: Uuid) -> Employee {
        Employee {
            id,
            user_id: self.user_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            daily_wage: self.daily_wage,
            overtime_rate: self.overtime_rate,
            half_day_rate: self.half_day_rate,
            status: self.status,
        }
    }
}

/// Request body for capturing one day's attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Overtime worked on the day, in hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Monetary advance paid out on the day.
    #[serde(default)]
    pub advance_taken: Decimal,
    /// Optional free-text note.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceRequest {
    /// Converts the request into an attendance row under the given id.
    pub fn into_record(self, id: Uuid) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: self.employee_id,
            date: self.date,
            status: self.status,
            overtime_hours: self.overtime_hours,
            advance_taken: self.advance_taken,
            notes: self.notes,
        }
    }
}

/// Request body for the wage calculation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateWageRequest {
    /// The employee to settle.
    pub employee_id: Uuid,
    /// The start of the calculation range (inclusive).
    pub period_start: NaiveDate,
    /// The end of the calculation range (inclusive).
    pub period_end: NaiveDate,
    /// The cadence label to record on the wage record.
    pub calculation_type: CalculationType,
}

/// Request body for granting a role to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequest {
    /// The user to grant the role to.
    pub user_id: Uuid,
    /// The role to grant.
    pub role: Role,
}

/// Query parameters for filtering attendance listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    /// Restrict to one employee.
    pub employee_id: Option<Uuid>,
    /// Restrict to dates on or after this day.
    pub from: Option<NaiveDate>,
    /// Restrict to dates on or before this day.
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_employee_request_defaults() {
        let json = r#"{
            "full_name": "Asha Verma",
            "daily_wage": "500",
            "overtime_rate": "50",
            "half_day_rate": "250"
        }"#;

        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, EmployeeStatus::Active);
        assert!(request.user_id.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_employee_request_conversion() {
        let request = EmployeeRequest {
            user_id: None,
            full_name: "Asha Verma".to_string(),
            email: Some("asha@example.com".to_string()),
            phone: None,
            daily_wage: Decimal::from_str("500").unwrap(),
            overtime_rate: Decimal::from_str("50").unwrap(),
            half_day_rate: Decimal::from_str("250").unwrap(),
            status: EmployeeStatus::Active,
        };

        let id = Uuid::new_v4();
        let employee = request.into_employee(id);
        assert_eq!(employee.id, id);
        assert_eq!(employee.full_name, "Asha Verma");
        assert_eq!(employee.email.as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn test_deserialize_attendance_request_defaults() {
        let json = r#"{
            "employee_id": "4f5c1560-93fb-4a5d-b8a8-8ab5c5e91e43",
            "date": "2025-03-10",
            "status": "present"
        }"#;

        let request: AttendanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.overtime_hours, Decimal::ZERO);
        assert_eq!(request.advance_taken, Decimal::ZERO);
        assert!(request.notes.is_none());
    }

    #[test]
    fn test_deserialize_calculate_request() {
        let json = r#"{
            "employee_id": "4f5c1560-93fb-4a5d-b8a8-8ab5c5e91e43",
            "period_start": "2025-03-01",
            "period_end": "2025-03-31",
            "calculation_type": "monthly"
        }"#;

        let request: CalculateWageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.calculation_type, CalculationType::Monthly);
        assert!(request.period_start <= request.period_end);
    }

    #[test]
    fn test_deserialize_role_request() {
        let json = r#"{
            "user_id": "4f5c1560-93fb-4a5d-b8a8-8ab5c5e91e43",
            "role": "employee"
        }"#;

        let request: RoleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role, Role::Employee);
    }
}
