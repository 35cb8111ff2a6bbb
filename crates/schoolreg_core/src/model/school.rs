//! School record model and registration validation.
//!
//! # Responsibility
//! - Define the caller-facing draft shape (no identifier) and the stored
//!   record shape (identifier assigned by the store).
//! - Validate registration input before it reaches persistence.
//!
//! # Invariants
//! - `SchoolId` is assigned by the store on insert, is unique, and is never
//!   reused for another record.
//! - Invalid drafts must be rejected before any SQL write.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid contact regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Store-assigned identifier for a school record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SchoolId = i64;

/// Validation error for registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchoolValidationError {
    /// The named field is empty after trimming.
    EmptyField(&'static str),
    /// `contact` is not a 10-digit numeral string.
    InvalidContact,
    /// `email_id` does not look like `local@domain.tld`.
    InvalidEmail,
}

impl Display for SchoolValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "field `{field}` must not be empty"),
            Self::InvalidContact => write!(f, "contact must be exactly 10 digits"),
            Self::InvalidEmail => write!(f, "email_id is not a valid email address"),
        }
    }
}

impl Error for SchoolValidationError {}

/// Caller-supplied record shape for registering a school.
///
/// Deliberately excludes the identifier: the store assigns it on insert and
/// returns it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// 10-digit numeral string.
    pub contact: String,
    pub email_id: String,
    /// Reference (path or URI) to image bytes, not the bytes themselves.
    /// The referenced file is not copied or persisted by this crate.
    pub image: String,
}

/// Stored school record as read back from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// Store-assigned, unique, strictly increasing.
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: String,
    /// Insert timestamp in epoch milliseconds, assigned by the store.
    pub created_at: i64,
}

impl SchoolDraft {
    /// Returns a copy with all string fields trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            contact: self.contact.trim().to_string(),
            email_id: self.email_id.trim().to_string(),
            image: self.image.trim().to_string(),
        }
    }

    /// Validates registration input.
    ///
    /// # Contract
    /// - `name`, `address`, `city`, `state` and `image` must be non-empty
    ///   after trimming.
    /// - `contact` must be exactly 10 ASCII digits.
    /// - `email_id` must match a minimal `local@domain.tld` shape.
    pub fn validate(&self) -> Result<(), SchoolValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("image", &self.image),
        ] {
            if value.trim().is_empty() {
                return Err(SchoolValidationError::EmptyField(field));
            }
        }

        if !CONTACT_RE.is_match(&self.contact) {
            return Err(SchoolValidationError::InvalidContact);
        }

        if !EMAIL_RE.is_match(&self.email_id) {
            return Err(SchoolValidationError::InvalidEmail);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SchoolDraft, SchoolValidationError};

    fn valid_draft() -> SchoolDraft {
        SchoolDraft {
            name: "Oak Elementary".to_string(),
            address: "1 Oak St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            contact: "1234567890".to_string(),
            email_id: "a@oak.edu".to_string(),
            image: "ref1".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        valid_draft().validate().expect("draft should be valid");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            SchoolValidationError::EmptyField("name")
        );
    }

    #[test]
    fn contact_must_be_exactly_ten_digits() {
        let mut draft = valid_draft();

        draft.contact = "123456789".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            SchoolValidationError::InvalidContact
        );

        draft.contact = "12345678901".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            SchoolValidationError::InvalidContact
        );

        draft.contact = "12345abcde".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            SchoolValidationError::InvalidContact
        );
    }

    #[test]
    fn email_must_have_local_domain_and_tld() {
        let mut draft = valid_draft();

        draft.email_id = "not-an-email".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            SchoolValidationError::InvalidEmail
        );

        draft.email_id = "a@nodot".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            SchoolValidationError::InvalidEmail
        );
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let draft = SchoolDraft {
            name: "  Oak Elementary  ".to_string(),
            address: " 1 Oak St ".to_string(),
            city: " Springfield".to_string(),
            state: "IL ".to_string(),
            contact: " 1234567890 ".to_string(),
            email_id: " a@oak.edu ".to_string(),
            image: " ref1 ".to_string(),
        };

        let trimmed = draft.trimmed();
        assert_eq!(trimmed.name, "Oak Elementary");
        assert_eq!(trimmed.contact, "1234567890");
        trimmed.validate().expect("trimmed draft should be valid");
    }
}
