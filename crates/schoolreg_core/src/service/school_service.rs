//! School registration use-case service.
//!
//! # Responsibility
//! - Provide the two use-case entry points backing the view layer's
//!   creation and listing screens.
//! - Sanitize and validate registration input before it reaches the store.
//!
//! # Invariants
//! - Invalid input is rejected here; the repository never sees it.
//! - Service layer remains storage-agnostic.

use crate::model::school::{School, SchoolDraft, SchoolId};
use crate::repo::school_repo::{RepoResult, SchoolRepository};
use log::info;

/// Request model for registering a school.
///
/// Field values are taken as entered; the service trims them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSchoolRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// 10-digit numeral string.
    pub contact: String,
    pub email_id: String,
    /// Reference (path or URI) to a locally chosen image.
    pub image: String,
}

/// Use-case service wrapper for the school registry.
pub struct SchoolService<R: SchoolRepository> {
    repo: R,
}

impl<R: SchoolRepository> SchoolService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new school and returns its store-assigned id.
    ///
    /// # Contract
    /// - All string fields are trimmed before validation.
    /// - Validation failures surface before any write is attempted.
    pub fn register_school(&self, request: &RegisterSchoolRequest) -> RepoResult<SchoolId> {
        let draft = SchoolDraft {
            name: request.name.clone(),
            address: request.address.clone(),
            city: request.city.clone(),
            state: request.state.clone(),
            contact: request.contact.clone(),
            email_id: request.email_id.clone(),
            image: request.image.clone(),
        }
        .trimmed();
        draft.validate()?;

        let id = self.repo.insert_school(&draft)?;
        info!("event=school_registered module=service status=ok id={id}");
        Ok(id)
    }

    /// Lists all registered schools in insertion order.
    pub fn list_schools(&self) -> RepoResult<Vec<School>> {
        self.repo.list_schools()
    }
}
