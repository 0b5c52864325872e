//! Integration test suite for stratcp
//!
//! This crate provides shared fixtures and scenario tests that exercise
//! all copy strategies together, checking the properties that tie them to
//! each other (equal byte counts, content fidelity, overwrite semantics).

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Monomorphized strategy table for parameterized tests
pub mod strategies;

/// Shared test fixtures and data generators
pub mod test_utils;
