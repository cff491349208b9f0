//! Driven port for the user document collection.
//!
//! Adapters own matching semantics: name and e-mail lookups are exact,
//! case-sensitive equality, and multi-record reads come back in the store's
//! natural order.

use async_trait::async_trait;

use crate::domain::{StudyFieldId, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum UserDirectoryError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "user directory connection failed: {message}" as service_unavailable,
        /// A read or write failed during execution.
        Query { message: String } =>
            "user directory query failed: {message}" as internal,
    }
}

/// Capability contract for reading and writing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the user whose first name and surname both match exactly.
    async fn find_by_full_name(
        &self,
        first_name: &str,
        surname: &str,
    ) -> Result<Option<User>, UserDirectoryError>;

    /// Return at most `limit` users whose surname matches exactly.
    async fn find_by_surname(
        &self,
        surname: &str,
        limit: usize,
    ) -> Result<Vec<User>, UserDirectoryError>;

    /// Return every stored user.
    async fn find_all(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError>;

    /// Fetch the user registered with `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserDirectoryError>;

    /// Return every user enrolled in the study field.
    async fn find_by_study_field_id(
        &self,
        study_field_id: &StudyFieldId,
    ) -> Result<Vec<User>, UserDirectoryError>;

    /// Insert a new user, returning the stored record with its assigned id.
    async fn save(&self, draft: UserDraft) -> Result<User, UserDirectoryError>;

    /// Remove the user if present; absent ids are not an error.
    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserDirectoryError>;

    /// Point the user at another study field (or none); absent ids are ignored.
    async fn update_study_field(
        &self,
        id: &UserId,
        study_field_id: Option<StudyFieldId>,
    ) -> Result<(), UserDirectoryError>;
}
