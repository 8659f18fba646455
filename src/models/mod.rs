//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod principal;
mod wage;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, EmployeeStatus};
pub use principal::{Principal, Role, RoleAssignment};
pub use wage::{CalculationType, PayPeriod, WageRecord};
