//! Toll registry contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the six data-access operations offered to toll callers.
//! - Keep SQL text and column names inside this module.
//!
//! # Invariants
//! - Every operation is exactly one parameterized statement.
//! - "No matching row" is reported as `None`/empty, never as an error.
//! - Every failure is reported as `StorageError`.

pub mod toll_registry;
