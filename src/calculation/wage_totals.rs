//! Attendance-to-wage accumulation.
//!
//! This module contains the pure fold at the heart of the engine: reducing
//! an employee's attendance slice into base wage, overtime amount, and
//! advance deductions. It has no storage dependency so the arithmetic is
//! testable (and property-testable) in isolation.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, Employee};

/// The three accumulated components of a wage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageTotals {
    /// Wage earned from attendance status: daily wage per present day,
    /// half-day rate per half day, nothing for absences.
    pub base_wage: Decimal,
    /// Overtime hours times the employee's overtime rate, across all days.
    pub overtime_amount: Decimal,
    /// Advances taken across all days, deducted at settlement.
    pub advance_deductions: Decimal,
}

impl WageTotals {
    /// Returns `base_wage + overtime_amount - advance_deductions`.
    ///
    /// The total may be negative when advances exceed earnings for the
    /// period; it is reported as-is, not clamped.
    pub fn total(&self) -> Decimal {
        self.base_wage + self.overtime_amount - self.advance_deductions
    }
}

/// Reduces an attendance slice into wage totals for one employee.
///
/// The fold is commutative: record order does not affect the result.
/// Overtime and advances accumulate independently of the day's status, so
/// an absent day can still carry an advance deduction.
///
/// # Arguments
///
/// * `employee` - The employee whose rates apply
/// * `records` - The attendance slice for the period, in any order
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::accumulate_totals;
/// use payroll_engine::models::{Employee, EmployeeStatus};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::new_v4(),
///     user_id: None,
///     full_name: "Asha Verma".to_string(),
///     email: None,
///     phone: None,
///     daily_wage: Decimal::new(500, 0),
///     overtime_rate: Decimal::new(50, 0),
///     half_day_rate: Decimal::new(250, 0),
///     status: EmployeeStatus::Active,
/// };
///
/// let totals = accumulate_totals(&employee, &[]);
/// assert_eq!(totals.total(), Decimal::ZERO);
/// ```
pub fn accumulate_totals(employee: &Employee, records: &[AttendanceRecord]) -> WageTotals {
    let mut base_wage = Decimal::ZERO;
    let mut overtime_amount = Decimal::ZERO;
    let mut advance_deductions = Decimal::ZERO;

    for record in records {
        match record.status {
            AttendanceStatus::Present => base_wage += employee.daily_wage,
            AttendanceStatus::HalfDay => base_wage += employee.half_day_rate,
            AttendanceStatus::Absent => {}
        }
        overtime_amount += record.overtime_hours * employee.overtime_rate;
        advance_deductions += record.advance_taken;
    }

    WageTotals {
        base_wage,
        overtime_amount,
        advance_deductions,
    }
}
