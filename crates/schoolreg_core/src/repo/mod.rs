//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the two-operation data access contract (insert, list-all).
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `SchoolDraft::validate()` before
//!   persistence.
//! - Repository construction rejects connections that are not migrated.

pub mod school_repo;
