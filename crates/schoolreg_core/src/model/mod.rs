//! Domain model for school registration records.
//!
//! # Responsibility
//! - Define the canonical record shapes used by core persistence and services.
//! - Own caller-side validation rules for registration input.
//!
//! # Invariants
//! - Record identifiers are assigned by the store, never by callers.
//! - Validation happens before any record reaches a write path.

pub mod school;
