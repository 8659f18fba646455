//! Wage record summarization.
//!
//! A pure fold over a wage record set into payment-status statistics.
//! Deterministic and order-invariant, so it is safe to recompute on every
//! read; no caching is involved.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WageRecord;

/// Payment-status statistics over a wage record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSummary {
    /// Sum of `total_wage` over paid records.
    pub total_paid: Decimal,
    /// Sum of `total_wage` over unpaid records.
    pub total_pending: Decimal,
    /// Count of distinct employees with at least one paid record.
    pub unique_employees_paid: usize,
    /// `total_paid` divided by the paid record count; zero when no record
    /// is paid.
    pub average_paid_wage: Decimal,
}

impl WageSummary {
    /// The summary of an empty record set: all fields zero.
    pub fn empty() -> Self {
        Self {
            total_paid: Decimal::ZERO,
            total_pending: Decimal::ZERO,
            unique_employees_paid: 0,
            average_paid_wage: Decimal::ZERO,
        }
    }
}

/// Folds a wage record set into a [`WageSummary`].
///
/// The input may be the full record set or any authorized subset; the same
/// input always yields the same output, in any order.
///
/// # Examples
///
/// ```
/// use payroll_engine::report::{WageSummary, summarize};
///
/// assert_eq!(summarize(&[]), WageSummary::empty());
/// ```
pub fn summarize(records: &[WageRecord]) -> WageSummary {
    let mut total_paid = Decimal::ZERO;
    let mut total_pending = Decimal::ZERO;
    let mut paid_count: u64 = 0;
    let mut paid_employees = HashSet::new();

    for record in records {
        if record.paid {
            total_paid += record.total_wage;
            paid_count += 1;
            paid_employees.insert(record.employee_id);
        } else {
            total_pending += record.total_wage;
        }
    }

    let average_paid_wage = if paid_count == 0 {
        Decimal::ZERO
    } else {
        total_paid / Decimal::from(paid_count)
    };

    WageSummary {
        total_paid,
        total_pending,
        unique_employees_paid: paid_employees.len(),
        average_paid_wage,
    }
}
