//! Reporting aggregation for the payroll engine.
//!
//! This module folds wage record sets into payment-status summaries.

mod summary;

pub use summary::{WageSummary, summarize};
