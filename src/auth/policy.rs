//! Row-level policy predicates.
//!
//! One boolean predicate per entity decides whether a principal may perform
//! an operation on a row. The predicates are pure functions over the
//! explicit [`Principal`] context plus the row's ownership relation, so they
//! can be evaluated by any storage technology and unit-tested in isolation.
//!
//! The rules, uniformly applied:
//!
//! - Admins hold full read/insert/update/delete on employees, attendance,
//!   and wages, and on role assignments.
//! - A non-admin principal may only `select`: its own employee row (via the
//!   owning `user_id` link), attendance and wage rows of that employee, and
//!   its own role-assignment rows.
//! - A principal with no admin role and no owning link sees nothing.
//!
//! Evaluation is per-row: a list query returns the subset of rows the
//! predicate allows, never an all-or-nothing table gate.

use uuid::Uuid;

use crate::models::{Employee, Principal, RoleAssignment};

/// An operation against a stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read a row.
    Select,
    /// Create a row.
    Insert,
    /// Mutate an existing row.
    Update,
    /// Remove a row.
    Delete,
}

impl Operation {
    /// Returns the operation's lowercase name for error reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Select => "select",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// A policy-governed entity, named for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// The employees table.
    Employees,
    /// The attendance table.
    Attendance,
    /// The wages table.
    Wages,
    /// The user_roles table.
    UserRoles,
}

impl Entity {
    /// Returns the entity's table name for error reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Employees => "employees",
            Entity::Attendance => "attendance",
            Entity::Wages => "wages",
            Entity::UserRoles => "user_roles",
        }
    }
}

/// Policy predicate for employee rows.
///
/// Admins may do anything; other principals may only read the employee row
/// whose `user_id` links to them.
pub fn allows_employee(principal: &Principal, operation: Operation, row: &Employee) -> bool {
    if principal.is_admin() {
        return true;
    }
    operation == Operation::Select && row.user_id == Some(principal.user_id)
}

/// Policy predicate for attendance rows.
///
/// `owner` is the `user_id` of the employee the row belongs to, resolved by
/// the storage layer. Non-admins may only read rows of their own employee.
pub fn allows_attendance(principal: &Principal, operation: Operation, owner: Option<Uuid>) -> bool {
    if principal.is_admin() {
        return true;
    }
    operation == Operation::Select && owner == Some(principal.user_id)
}

/// Policy predicate for wage rows.
///
/// Identical ownership rule to [`allows_attendance`]: visibility follows
/// the owning employee's `user_id` link.
pub fn allows_wage(principal: &Principal, operation: Operation, owner: Option<Uuid>) -> bool {
    if principal.is_admin() {
        return true;
    }
    operation == Operation::Select && owner == Some(principal.user_id)
}

/// Policy predicate for role-assignment rows.
///
/// Assignments are self-readable by their subject and fully managed by
/// admins. There is no self-service escalation path: non-admins hold no
/// insert/update/delete on this table.
pub fn allows_user_role(
    principal: &Principal,
    operation: Operation,
    row: &RoleAssignment,
) -> bool {
    if principal.is_admin() {
        return true;
    }
    operation == Operation::Select && row.user_id == principal.user_id
}
