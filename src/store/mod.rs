//! Storage collaborator for the payroll engine.
//!
//! The hosted database of a deployment is an external collaborator; this
//! module provides the in-process reference implementation: four tables
//! behind a lock, with the same uniqueness constraints and row-level
//! policy enforcement a hosted engine would apply.

mod memory;

pub use memory::MemoryStore;
