//! In-memory table set with row-level policy enforcement.
//!
//! Every access method takes the acting [`Principal`] explicitly and
//! evaluates the policy predicates from [`crate::auth`] per row, so the
//! data-access boundary is the trust boundary regardless of what sits in
//! front of it. List queries return the allowed subset; single-row reads
//! of an invisible row report not-found, and denied writes report
//! authorization errors.
//!
//! All operations take one lock over the table set, which gives each call
//! single-writer atomicity. A poisoned lock surfaces as the transient
//! storage error.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::auth::{
    Entity, Operation, allows_attendance, allows_employee, allows_user_role, allows_wage,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, Employee, PayPeriod, Principal, Role, RoleAssignment, WageRecord,
};

/// The four payroll tables.
#[derive(Debug, Default)]
struct Tables {
    employees: HashMap<Uuid, Employee>,
    attendance: HashMap<Uuid, AttendanceRecord>,
    wages: HashMap<Uuid, WageRecord>,
    user_roles: HashMap<Uuid, RoleAssignment>,
}

impl Tables {
    /// Resolves the owning principal of an employee row, if any.
    fn owner_of(&self, employee_id: Uuid) -> Option<Uuid> {
        self.employees.get(&employee_id).and_then(|e| e.user_id)
    }
}

/// In-memory storage collaborator.
///
/// # Example
///
/// ```
/// use payroll_engine::store::MemoryStore;
/// use uuid::Uuid;
///
/// let store = MemoryStore::new();
/// let admin_user = Uuid::new_v4();
/// store.bootstrap_admin(admin_user).unwrap();
///
/// let principal = store.principal_for(admin_user).unwrap();
/// assert!(principal.is_admin());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

fn lock_poisoned() -> EngineError {
    EngineError::TransientStorage {
        message: "storage lock poisoned".to_string(),
    }
}

fn denied(entity: Entity, operation: Operation) -> EngineError {
    EngineError::AuthorizationDenied {
        entity: entity.as_str().to_string(),
        operation: operation.as_str().to_string(),
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| lock_poisoned())
    }

    // ------------------------------------------------------------------
    // Principals and roles
    // ------------------------------------------------------------------

    /// Seeds the first admin role assignment, outside policy evaluation.
    ///
    /// A fresh store contains no admin, so no principal could pass the
    /// insert policy on user_roles. This is the migration-style escape
    /// hatch for deployment setup; it still enforces the (user_id, role)
    /// uniqueness constraint.
    pub fn bootstrap_admin(&self, user_id: Uuid) -> EngineResult<RoleAssignment> {
        let mut tables = self.write()?;
        insert_role_row(&mut tables, user_id, Role::Admin)
    }

    /// Assembles the policy evaluation context for a user from its role rows.
    ///
    /// This is not itself policy-gated: resolving who the caller is belongs
    /// to the authentication boundary, which runs before any policy check.
    pub fn principal_for(&self, user_id: Uuid) -> EngineResult<Principal> {
        let tables = self.read()?;
        let mut roles: Vec<Role> = tables
            .user_roles
            .values()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.role)
            .collect();
        roles.sort_by_key(|r| r.as_str());
        Ok(Principal::new(user_id, roles))
    }

    /// Grants a role to a user. Admin only; duplicates are rejected.
    pub fn assign_role(
        &self,
        principal: &Principal,
        user_id: Uuid,
        role: Role,
    ) -> EngineResult<RoleAssignment> {
        let mut tables = self.write()?;
        let probe = RoleAssignment {
            id: Uuid::nil(),
            user_id,
            role,
        };
        if !allows_user_role(principal, Operation::Insert, &probe) {
            return Err(denied(Entity::UserRoles, Operation::Insert));
        }
        insert_role_row(&mut tables, user_id, role)
    }

    /// Lists role assignments visible to the principal.
    ///
    /// Admins see every row; other principals see their own rows only.
    pub fn list_roles(&self, principal: &Principal) -> EngineResult<Vec<RoleAssignment>> {
        let tables = self.read()?;
        let mut rows: Vec<RoleAssignment> = tables
            .user_roles
            .values()
            .filter(|r| allows_user_role(principal, Operation::Select, r))
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.user_id, r.role.as_str()));
        Ok(rows)
    }

    // ------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------

    /// Inserts a new employee row. Admin only.
    pub fn insert_employee(
        &self,
        principal: &Principal,
        employee: Employee,
    ) -> EngineResult<Employee> {
        if !allows_employee(principal, Operation::Insert, &employee) {
            return Err(denied(Entity::Employees, Operation::Insert));
        }
        employee.validate()?;
        let mut tables = self.write()?;
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// Replaces an existing employee row. Admin only.
    pub fn update_employee(
        &self,
        principal: &Principal,
        employee: Employee,
    ) -> EngineResult<Employee> {
        employee.validate()?;
        let mut tables = self.write()?;
        let existing = tables
            .employees
            .get(&employee.id)
            .ok_or(EngineError::EmployeeNotFound { id: employee.id })?;
        if !allows_employee(principal, Operation::Select, existing) {
            // invisible rows behave as missing
            return Err(EngineError::EmployeeNotFound { id: employee.id });
        }
        if !allows_employee(principal, Operation::Update, existing) {
            return Err(denied(Entity::Employees, Operation::Update));
        }
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// Deletes an employee row. Admin only.
    ///
    /// Attendance and wage history is retained; `status = inactive` is the
    /// supported retirement path, delete is the hard admin tool.
    pub fn delete_employee(&self, principal: &Principal, id: Uuid) -> EngineResult<()> {
        let mut tables = self.write()?;
        let existing = tables
            .employees
            .get(&id)
            .ok_or(EngineError::EmployeeNotFound { id })?;
        if !allows_employee(principal, Operation::Select, existing) {
            return Err(EngineError::EmployeeNotFound { id });
        }
        if !allows_employee(principal, Operation::Delete, existing) {
            return Err(denied(Entity::Employees, Operation::Delete));
        }
        tables.employees.remove(&id);
        Ok(())
    }

    /// Fetches a single employee row visible to the principal.
    pub fn get_employee(&self, principal: &Principal, id: Uuid) -> EngineResult<Employee> {
        let tables = self.read()?;
        tables
            .employees
            .get(&id)
            .filter(|e| allows_employee(principal, Operation::Select, e))
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    /// Lists the employee rows visible to the principal, by name.
    pub fn list_employees(&self, principal: &Principal) -> EngineResult<Vec<Employee>> {
        let tables = self.read()?;
        let mut rows: Vec<Employee> = tables
            .employees
            .values()
            .filter(|e| allows_employee(principal, Operation::Select, e))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (&a.full_name, a.id).cmp(&(&b.full_name, b.id)));
        Ok(rows)
    }

    // ------------------------------------------------------------------
    // Attendance
    // ------------------------------------------------------------------

    /// Inserts a new attendance record. Admin only.
    ///
    /// The employee must exist and be active, and at most one record may
    /// exist per (employee, date); a second insert for the same pair fails
    /// with [`EngineError::DuplicateAttendance`] and never overwrites.
    pub fn insert_attendance(
        &self,
        principal: &Principal,
        record: AttendanceRecord,
    ) -> EngineResult<AttendanceRecord> {
        let mut tables = self.write()?;
        if !allows_attendance(
            principal,
            Operation::Insert,
            tables.owner_of(record.employee_id),
        ) {
            return Err(denied(Entity::Attendance, Operation::Insert));
        }
        record.validate()?;
        let employee = tables
            .employees
            .get(&record.employee_id)
            .ok_or(EngineError::EmployeeNotFound {
                id: record.employee_id,
            })?;
        if !employee.is_active() {
            return Err(EngineError::InvalidAttendance {
                field: "employee_id".to_string(),
                message: "employee is inactive".to_string(),
            });
        }
        let duplicate = tables
            .attendance
            .values()
            .any(|a| a.employee_id == record.employee_id && a.date == record.date);
        if duplicate {
            return Err(EngineError::DuplicateAttendance {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        tables.attendance.insert(record.id, record.clone());
        Ok(record)
    }

    /// Fetches the attendance slice for one employee over a period.
    ///
    /// Returns the rows visible to the principal with `date` inside the
    /// inclusive period, sorted by date.
    pub fn attendance_for_period(
        &self,
        principal: &Principal,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let tables = self.read()?;
        let owner = tables.owner_of(employee_id);
        let mut rows: Vec<AttendanceRecord> = tables
            .attendance
            .values()
            .filter(|a| a.employee_id == employee_id && period.contains_date(a.date))
            .filter(|_| allows_attendance(principal, Operation::Select, owner))
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.date);
        Ok(rows)
    }

    /// Lists the attendance rows visible to the principal, by date.
    pub fn list_attendance(&self, principal: &Principal) -> EngineResult<Vec<AttendanceRecord>> {
        let tables = self.read()?;
        let mut rows: Vec<AttendanceRecord> = tables
            .attendance
            .values()
            .filter(|a| {
                allows_attendance(principal, Operation::Select, tables.owner_of(a.employee_id))
            })
            .cloned()
            .collect();
        rows.sort_by_key(|a| (a.date, a.employee_id, a.id));
        Ok(rows)
    }

    // ------------------------------------------------------------------
    // Wages
    // ------------------------------------------------------------------

    /// Inserts a fully-populated wage record in one atomic write. Admin only.
    ///
    /// The calculation engine builds the complete record first; no error
    /// path leaves a partially-populated row behind.
    pub fn insert_wage(
        &self,
        principal: &Principal,
        record: WageRecord,
    ) -> EngineResult<WageRecord> {
        let mut tables = self.write()?;
        if !allows_wage(
            principal,
            Operation::Insert,
            tables.owner_of(record.employee_id),
        ) {
            return Err(denied(Entity::Wages, Operation::Insert));
        }
        if !tables.employees.contains_key(&record.employee_id) {
            return Err(EngineError::EmployeeNotFound {
                id: record.employee_id,
            });
        }
        tables.wages.insert(record.id, record.clone());
        Ok(record)
    }

    /// Fetches a single wage record visible to the principal.
    pub fn get_wage(&self, principal: &Principal, id: Uuid) -> EngineResult<WageRecord> {
        let tables = self.read()?;
        tables
            .wages
            .get(&id)
            .filter(|w| allows_wage(principal, Operation::Select, tables.owner_of(w.employee_id)))
            .cloned()
            .ok_or(EngineError::WageNotFound { id })
    }

    /// Lists the wage records visible to the principal, by period start.
    pub fn list_wages(&self, principal: &Principal) -> EngineResult<Vec<WageRecord>> {
        let tables = self.read()?;
        let mut rows: Vec<WageRecord> = tables
            .wages
            .values()
            .filter(|w| allows_wage(principal, Operation::Select, tables.owner_of(w.employee_id)))
            .cloned()
            .collect();
        rows.sort_by_key(|w| (w.period_start, w.employee_id, w.id));
        Ok(rows)
    }

    /// Transitions a wage record to paid. Admin only.
    ///
    /// Re-invoking on an already-paid record is an accepted no-op that
    /// returns the current row with `paid_at` unchanged; there is no
    /// un-pay transition.
    pub fn mark_paid(&self, principal: &Principal, id: Uuid) -> EngineResult<WageRecord> {
        let mut tables = self.write()?;
        let owner = {
            let record = tables
                .wages
                .get(&id)
                .ok_or(EngineError::WageNotFound { id })?;
            tables.owner_of(record.employee_id)
        };
        if !allows_wage(principal, Operation::Select, owner) {
            return Err(EngineError::WageNotFound { id });
        }
        if !allows_wage(principal, Operation::Update, owner) {
            return Err(denied(Entity::Wages, Operation::Update));
        }
        let record = tables
            .wages
            .get_mut(&id)
            .ok_or(EngineError::WageNotFound { id })?;
        if !record.paid {
            record.paid = true;
            record.paid_at = Some(Utc::now());
        }
        Ok(record.clone())
    }
}

/// Inserts a user_roles row, enforcing the (user_id, role) uniqueness.
fn insert_role_row(
    tables: &mut Tables,
    user_id: Uuid,
    role: Role,
) -> EngineResult<RoleAssignment> {
    let duplicate = tables
        .user_roles
        .values()
        .any(|r| r.user_id == user_id && r.role == role);
    if duplicate {
        return Err(EngineError::DuplicateRole {
            user_id,
            role: role.as_str().to_string(),
        });
    }
    let assignment = RoleAssignment {
        id: Uuid::new_v4(),
        user_id,
        role,
    };
    tables.user_roles.insert(assignment.id, assignment.clone());
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, CalculationType, EmployeeStatus};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_admin(store: &MemoryStore) -> Principal {
        let user_id = Uuid::new_v4();
        store.bootstrap_admin(user_id).unwrap();
        store.principal_for(user_id).unwrap()
    }

    fn create_test_employee(user_id: Option<Uuid>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            user_id,
            full_name: "Asha Verma".to_string(),
            email: None,
            phone: None,
            daily_wage: dec("500"),
            overtime_rate: dec("50"),
            half_day_rate: dec("250"),
            status: EmployeeStatus::Active,
        }
    }

    fn create_test_attendance(employee_id: Uuid, day: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id,
            date: date(day),
            status: AttendanceStatus::Present,
            overtime_hours: Decimal::ZERO,
            advance_taken: Decimal::ZERO,
            notes: None,
        }
    }

    fn create_test_wage(employee_id: Uuid) -> WageRecord {
        WageRecord {
            id: Uuid::new_v4(),
            employee_id,
            period_start: date("2025-03-01"),
            period_end: date("2025-03-31"),
            calculation_type: CalculationType::Monthly,
            base_wage: dec("750"),
            overtime_amount: dec("100"),
            advance_deductions: dec("100"),
            total_wage: dec("750"),
            paid: false,
            paid_at: None,
        }
    }

    /// ST-001: second attendance insert for the same (employee, date) fails
    #[test]
    fn test_duplicate_attendance_insert_fails() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let employee = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();

        let first = create_test_attendance(employee.id, "2025-03-10");
        store.insert_attendance(&admin, first.clone()).unwrap();

        let mut second = create_test_attendance(employee.id, "2025-03-10");
        second.status = AttendanceStatus::Absent;
        let result = store.insert_attendance(&admin, second);

        match result.unwrap_err() {
            EngineError::DuplicateAttendance { employee_id, date } => {
                assert_eq!(employee_id, employee.id);
                assert_eq!(date, first.date);
            }
            other => panic!("Expected DuplicateAttendance, got {:?}", other),
        }

        // the first record is intact, not overwritten
        let period = PayPeriod::new(date("2025-03-10"), date("2025-03-10")).unwrap();
        let rows = store
            .attendance_for_period(&admin, employee.id, period)
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, AttendanceStatus::Present);
    }

    /// ST-002: same date on different employees is allowed
    #[test]
    fn test_same_date_different_employee_is_allowed() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let first = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();
        let second = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();

        store
            .insert_attendance(&admin, create_test_attendance(first.id, "2025-03-10"))
            .unwrap();
        store
            .insert_attendance(&admin, create_test_attendance(second.id, "2025-03-10"))
            .unwrap();
    }

    /// ST-003: attendance insert for inactive employee is rejected
    #[test]
    fn test_attendance_for_inactive_employee_is_rejected() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let mut employee = create_test_employee(None);
        employee.status = EmployeeStatus::Inactive;
        let employee = store.insert_employee(&admin, employee).unwrap();

        let result =
            store.insert_attendance(&admin, create_test_attendance(employee.id, "2025-03-10"));

        match result.unwrap_err() {
            EngineError::InvalidAttendance { field, .. } => {
                assert_eq!(field, "employee_id");
            }
            other => panic!("Expected InvalidAttendance, got {:?}", other),
        }
    }

    /// ST-004: attendance insert for missing employee is rejected
    #[test]
    fn test_attendance_for_missing_employee_is_rejected() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let orphan = create_test_attendance(Uuid::new_v4(), "2025-03-10");
        assert!(matches!(
            store.insert_attendance(&admin, orphan).unwrap_err(),
            EngineError::EmployeeNotFound { .. }
        ));
    }

    /// ST-005: mark_paid is idempotent and keeps paid_at stable
    #[test]
    fn test_mark_paid_is_idempotent() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let employee = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();
        let wage = store
            .insert_wage(&admin, create_test_wage(employee.id))
            .unwrap();

        let first = store.mark_paid(&admin, wage.id).unwrap();
        assert!(first.paid);
        let paid_at = first.paid_at.expect("paid_at set on first transition");

        let second = store.mark_paid(&admin, wage.id).unwrap();
        assert!(second.paid);
        assert_eq!(second.paid_at, Some(paid_at));
    }

    /// ST-006: non-admin principals get filtered row sets
    #[test]
    fn test_non_admin_sees_only_owned_rows() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);

        let owner_user = Uuid::new_v4();
        let owned = store
            .insert_employee(&admin, create_test_employee(Some(owner_user)))
            .unwrap();
        let other = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();

        store
            .insert_attendance(&admin, create_test_attendance(owned.id, "2025-03-10"))
            .unwrap();
        store
            .insert_attendance(&admin, create_test_attendance(other.id, "2025-03-10"))
            .unwrap();
        store
            .insert_wage(&admin, create_test_wage(owned.id))
            .unwrap();
        store
            .insert_wage(&admin, create_test_wage(other.id))
            .unwrap();

        let principal = store.principal_for(owner_user).unwrap();
        let employees = store.list_employees(&principal).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, owned.id);

        let attendance = store.list_attendance(&principal).unwrap();
        assert_eq!(attendance.len(), 1);
        assert_eq!(attendance[0].employee_id, owned.id);

        let wages = store.list_wages(&principal).unwrap();
        assert_eq!(wages.len(), 1);
        assert_eq!(wages[0].employee_id, owned.id);

        // admin sees everything
        assert_eq!(store.list_employees(&admin).unwrap().len(), 2);
        assert_eq!(store.list_attendance(&admin).unwrap().len(), 2);
        assert_eq!(store.list_wages(&admin).unwrap().len(), 2);
    }

    /// ST-007: invisible single rows behave as missing
    #[test]
    fn test_invisible_row_reads_as_not_found() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let hidden = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();
        let wage = store.insert_wage(&admin, create_test_wage(hidden.id)).unwrap();

        let stranger = Principal::without_roles(Uuid::new_v4());
        assert!(matches!(
            store.get_employee(&stranger, hidden.id).unwrap_err(),
            EngineError::EmployeeNotFound { .. }
        ));
        assert!(matches!(
            store.get_wage(&stranger, wage.id).unwrap_err(),
            EngineError::WageNotFound { .. }
        ));
    }

    /// ST-008: non-admin writes are denied
    #[test]
    fn test_non_admin_writes_are_denied() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let owner_user = Uuid::new_v4();
        let owned = store
            .insert_employee(&admin, create_test_employee(Some(owner_user)))
            .unwrap();
        let wage = store.insert_wage(&admin, create_test_wage(owned.id)).unwrap();

        let principal = store.principal_for(owner_user).unwrap();

        assert!(matches!(
            store
                .insert_attendance(&principal, create_test_attendance(owned.id, "2025-03-11"))
                .unwrap_err(),
            EngineError::AuthorizationDenied { .. }
        ));
        // visible but not writable: mark_paid on the owner's own wage row
        assert!(matches!(
            store.mark_paid(&principal, wage.id).unwrap_err(),
            EngineError::AuthorizationDenied { .. }
        ));
        let mut renamed = owned.clone();
        renamed.full_name = "Someone Else".to_string();
        assert!(matches!(
            store.update_employee(&principal, renamed).unwrap_err(),
            EngineError::AuthorizationDenied { .. }
        ));
    }

    /// ST-009: (user_id, role) uniqueness on role assignment
    #[test]
    fn test_duplicate_role_assignment_fails() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let user = Uuid::new_v4();

        store.assign_role(&admin, user, Role::Employee).unwrap();
        let result = store.assign_role(&admin, user, Role::Employee);

        match result.unwrap_err() {
            EngineError::DuplicateRole { user_id, role } => {
                assert_eq!(user_id, user);
                assert_eq!(role, "employee");
            }
            other => panic!("Expected DuplicateRole, got {:?}", other),
        }

        // a different role for the same user is fine
        store.assign_role(&admin, user, Role::Admin).unwrap();
    }

    /// ST-010: non-admins cannot grant roles, not even to themselves
    #[test]
    fn test_non_admin_cannot_assign_roles() {
        let store = MemoryStore::new();
        create_admin(&store);
        let principal = Principal::without_roles(Uuid::new_v4());

        let result = store.assign_role(&principal, principal.user_id, Role::Admin);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::AuthorizationDenied { .. }
        ));
    }

    /// ST-011: role rows are self-readable
    #[test]
    fn test_role_rows_are_self_readable() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let user = Uuid::new_v4();
        store.assign_role(&admin, user, Role::Employee).unwrap();

        let principal = store.principal_for(user).unwrap();
        let rows = store.list_roles(&principal).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, user);

        // admin sees its own bootstrap row plus the grant
        assert_eq!(store.list_roles(&admin).unwrap().len(), 2);
    }

    /// ST-012: attendance_for_period returns the inclusive slice in order
    #[test]
    fn test_attendance_for_period_is_inclusive_and_sorted() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let employee = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();

        for day in ["2025-03-12", "2025-03-10", "2025-03-11", "2025-03-31", "2025-02-28"] {
            store
                .insert_attendance(&admin, create_test_attendance(employee.id, day))
                .unwrap();
        }

        let period = PayPeriod::new(date("2025-03-10"), date("2025-03-31")).unwrap();
        let rows = store
            .attendance_for_period(&admin, employee.id, period)
            .unwrap();
        let days: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(
            days,
            vec![
                date("2025-03-10"),
                date("2025-03-11"),
                date("2025-03-12"),
                date("2025-03-31"),
            ]
        );
    }

    /// ST-013: delete removes the employee row, history remains
    #[test]
    fn test_delete_employee_keeps_history() {
        let store = MemoryStore::new();
        let admin = create_admin(&store);
        let employee = store
            .insert_employee(&admin, create_test_employee(None))
            .unwrap();
        store
            .insert_attendance(&admin, create_test_attendance(employee.id, "2025-03-10"))
            .unwrap();

        store.delete_employee(&admin, employee.id).unwrap();

        assert!(matches!(
            store.get_employee(&admin, employee.id).unwrap_err(),
            EngineError::EmployeeNotFound { .. }
        ));
        assert_eq!(store.list_attendance(&admin).unwrap().len(), 1);
    }

    /// ST-014: bootstrap_admin enforces uniqueness
    #[test]
    fn test_bootstrap_admin_rejects_duplicate() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        store.bootstrap_admin(user).unwrap();
        assert!(matches!(
            store.bootstrap_admin(user).unwrap_err(),
            EngineError::DuplicateRole { .. }
        ));
    }
}
