//! Driving port for user-facing reads.
//!
//! Inbound adapters use this port to fetch users with their study field
//! resolved, without importing the directories behind it.

use async_trait::async_trait;

use crate::domain::search::SearchRequest;
use crate::domain::{Error, StudyField, UserId, UserProfile};

/// Domain use-case port for reading user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one profile by user id.
    async fn profile(&self, id: &UserId) -> Result<Option<UserProfile>, Error>;

    /// Profiles found by the name search, bounded by the request budget.
    ///
    /// Returns `None` when the name has too many parts to be searched.
    async fn profiles_by_name(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<Vec<UserProfile>>, Error>;

    /// Fetch the profile registered with `email`.
    ///
    /// Path-safe addresses use `_` in place of `.`; callers pass the address
    /// as received and the implementation restores the dots.
    async fn profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, Error>;

    /// Profiles of every user enrolled in the named study field.
    ///
    /// An unknown study field yields an empty list.
    async fn profiles_by_study_field(&self, name: &str) -> Result<Vec<UserProfile>, Error>;

    /// Profiles of every stored user.
    async fn all_profiles(&self) -> Result<Vec<UserProfile>, Error>;

    /// Every known study field.
    async fn study_fields(&self) -> Result<Vec<StudyField>, Error>;
}
