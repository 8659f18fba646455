//! Wage record and pay period models.
//!
//! This module contains the [`WageRecord`], [`PayPeriod`], and
//! [`CalculationType`] types used by the wage calculation engine.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// The cadence label attached to a wage record.
///
/// The label records how the period was chosen; the arithmetic is always
/// attendance-driven over the record's date range regardless of label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// A single-day settlement.
    Daily,
    /// A weekly settlement.
    Weekly,
    /// A monthly settlement.
    Monthly,
}

/// An inclusive calendar-date range for a wage calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a validated pay period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when `start_date` is after
    /// `end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A settled wage calculation for one employee over one pay period.
///
/// The four monetary fields are derived from the attendance snapshot at
/// calculation time and are write-once; later attendance edits do not
/// recompute them. A fresh calculation produces a new record instead.
/// `paid`/`paid_at` are the only fields ever mutated post-creation, and
/// only in the unpaid-to-paid direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// The start of the covered period (inclusive).
    pub period_start: NaiveDate,
    /// The end of the covered period (inclusive).
    pub period_end: NaiveDate,
    /// The cadence label for the calculation.
    pub calculation_type: CalculationType,
    /// Wage earned from attendance status over the period.
    pub base_wage: Decimal,
    /// Amount earned from overtime hours over the period.
    pub overtime_amount: Decimal,
    /// Advances taken over the period, deducted from the total.
    pub advance_deductions: Decimal,
    /// `base_wage + overtime_amount - advance_deductions`, exactly.
    /// May be negative when advances exceed earnings.
    pub total_wage: Decimal,
    /// Whether the wage has been paid out.
    pub paid: bool,
    /// When the record transitioned to paid, if it has.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}
