//! Authorization policy model for the payroll engine.
//!
//! This module contains the row-level policy predicates evaluated by the
//! storage layer for every read and write.

mod policy;

pub use policy::{
    Entity, Operation, allows_attendance, allows_employee, allows_user_role, allows_wage,
};
