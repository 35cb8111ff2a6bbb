//! Core domain logic for the local school registry.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::school::{School, SchoolDraft, SchoolId, SchoolValidationError};
pub use repo::school_repo::{RepoError, RepoResult, SchoolRepository, SqliteSchoolRepository};
pub use service::school_service::{RegisterSchoolRequest, SchoolService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
