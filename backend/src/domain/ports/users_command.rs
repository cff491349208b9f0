//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, StudyFieldId, UserDraft, UserId, UserProfile};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user existed and was removed.
    Deleted,
    /// No user had the requested id.
    NotFound,
}

/// Domain use-case port for user mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user and return the id the store assigned.
    async fn create_user(&self, draft: UserDraft) -> Result<UserId, Error>;

    /// Point a user at another study field (or none) and return the
    /// re-read profile.
    ///
    /// Returns `None` without touching the store when `id` is absent, and
    /// `None` when no user has that id.
    async fn update_study_field(
        &self,
        id: Option<UserId>,
        study_field_id: Option<StudyFieldId>,
    ) -> Result<Option<UserProfile>, Error>;

    /// Remove a user.
    async fn delete_user(&self, id: &UserId) -> Result<DeleteOutcome, Error>;
}
