//! Wage calculation orchestration.
//!
//! Glues the storage collaborator to the pure fold in
//! [`super::wage_totals`]: fetch the employee and its attendance slice,
//! accumulate, persist one immutable wage record.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationType, PayPeriod, Principal, WageRecord};
use crate::store::MemoryStore;

use super::wage_totals::accumulate_totals;

/// Calculates and persists a wage record for one employee over a period.
///
/// The attendance slice is read as a snapshot: later attendance edits do
/// not recompute the persisted record, and a fresh calculation for the
/// same period produces a second record rather than replacing the first
/// (overlapping coverage is accepted). The persisted record satisfies
/// `total_wage = base_wage + overtime_amount - advance_deductions` exactly
/// and starts unpaid.
///
/// # Arguments
///
/// * `store` - The storage collaborator
/// * `principal` - The acting principal; wage insert is admin-only
/// * `employee_id` - The employee to settle
/// * `period_start` / `period_end` - The inclusive calculation range
/// * `calculation_type` - The cadence label to record
///
/// # Errors
///
/// * [`EngineError::InvalidPeriod`] when `period_start > period_end`
/// * [`EngineError::EmployeeNotFound`] when the employee does not resolve
/// * [`EngineError::InvalidEmployee`] when the employee is inactive
/// * [`EngineError::AuthorizationDenied`] when the principal may not insert
/// * [`EngineError::TransientStorage`] on storage failure; safe to retry,
///   since no partial record is ever written
pub fn calculate_wage(
    store: &MemoryStore,
    principal: &Principal,
    employee_id: Uuid,
    period_start: NaiveDate,
    period_end: NaiveDate,
    calculation_type: CalculationType,
) -> EngineResult<WageRecord> {
    let period = PayPeriod::new(period_start, period_end)?;

    let employee = store.get_employee(principal, employee_id)?;
    if !employee.is_active() {
        return Err(EngineError::InvalidEmployee {
            field: "status".to_string(),
            message: "inactive employees cannot receive new wage entries".to_string(),
        });
    }

    let records = store.attendance_for_period(principal, employee_id, period)?;
    let totals = accumulate_totals(&employee, &records);
    debug!(
        employee_id = %employee_id,
        records = records.len(),
        base_wage = %totals.base_wage,
        overtime_amount = %totals.overtime_amount,
        advance_deductions = %totals.advance_deductions,
        "Accumulated attendance slice"
    );

    let record = WageRecord {
        id: Uuid::new_v4(),
        employee_id,
        period_start,
        period_end,
        calculation_type,
        base_wage: totals.base_wage,
        overtime_amount: totals.overtime_amount,
        advance_deductions: totals.advance_deductions,
        total_wage: totals.total(),
        paid: false,
        paid_at: None,
    };

    store.insert_wage(principal, record)
}
