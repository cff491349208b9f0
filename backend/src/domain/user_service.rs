//! User directory domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! the user and study-field directories. Reads resolve each user's study
//! field into a display name; writes consult the [`MutationPolicy`] first.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    DeleteOutcome, MutationPolicy, StudyFieldDirectory, UserDirectory, UserMutation,
    UsersCommand, UsersQuery,
};
use crate::domain::search::{NameSearchEngine, SearchRequest};
use crate::domain::{Error, StudyField, StudyFieldId, User, UserDraft, UserId, UserProfile};

/// Restore the dots of an e-mail address received in path-safe form.
///
/// # Examples
/// ```
/// use westbook::domain::decode_path_email;
///
/// assert_eq!(
///     decode_path_email("ola_nordmann_example_com"),
///     "ola.nordmann.example.com"
/// );
/// ```
pub fn decode_path_email(encoded: &str) -> String {
    encoded.replace('_', ".")
}

/// Service implementing the user driving ports.
pub struct UserDirectoryService<U: ?Sized, S: ?Sized> {
    users: Arc<U>,
    study_fields: Arc<S>,
    names: NameSearchEngine<U>,
    policy: Arc<dyn MutationPolicy>,
}

impl<U, S> UserDirectoryService<U, S>
where
    U: UserDirectory + ?Sized,
    S: StudyFieldDirectory + ?Sized,
{
    /// Create a service over the given directories and mutation policy.
    pub fn new(users: Arc<U>, study_fields: Arc<S>, policy: Arc<dyn MutationPolicy>) -> Self {
        Self {
            names: NameSearchEngine::new(Arc::clone(&users)),
            users,
            study_fields,
            policy,
        }
    }

    async fn study_field_name(&self, id: Option<&StudyFieldId>) -> Result<Option<String>, Error> {
        let Some(id) = id else {
            return Ok(None);
        };
        let field = self.study_fields.find_by_id(id).await?;
        Ok(field.map(|f| f.name().to_owned()))
    }

    async fn to_profile(&self, user: User) -> Result<UserProfile, Error> {
        let name = self.study_field_name(user.study_field_id()).await?;
        Ok(UserProfile::new(user, name))
    }

    async fn to_profiles(&self, users: Vec<User>) -> Result<Vec<UserProfile>, Error> {
        let mut names: HashMap<StudyFieldId, Option<String>> = HashMap::new();
        let mut profiles = Vec::with_capacity(users.len());
        for user in users {
            let name = match user.study_field_id() {
                None => None,
                Some(id) => match names.get(id) {
                    Some(cached) => cached.clone(),
                    None => {
                        let resolved = self.study_field_name(Some(id)).await?;
                        names.insert(id.clone(), resolved.clone());
                        resolved
                    }
                },
            };
            profiles.push(UserProfile::new(user, name));
        }
        Ok(profiles)
    }

    async fn find_profile(&self, id: &UserId) -> Result<Option<UserProfile>, Error> {
        match self.users.find_by_id(id).await? {
            Some(user) => self.to_profile(user).await.map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<U, S> UsersQuery for UserDirectoryService<U, S>
where
    U: UserDirectory + ?Sized,
    S: StudyFieldDirectory + ?Sized,
{
    async fn profile(&self, id: &UserId) -> Result<Option<UserProfile>, Error> {
        self.find_profile(id).await
    }

    async fn profiles_by_name(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<Vec<UserProfile>>, Error> {
        match self.names.search(request).await?.supported() {
            Some(users) => self.to_profiles(users).await.map(Some),
            None => Ok(None),
        }
    }

    async fn profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, Error> {
        let email = decode_path_email(email);
        match self.users.find_by_email(&email).await? {
            Some(user) => self.to_profile(user).await.map(Some),
            None => Ok(None),
        }
    }

    async fn profiles_by_study_field(&self, name: &str) -> Result<Vec<UserProfile>, Error> {
        let Some(field) = self.study_fields.find_by_name(name).await? else {
            debug!(study_field = name, "unknown study field");
            return Ok(Vec::new());
        };
        let users = self.users.find_by_study_field_id(field.id()).await?;
        let display_name = field.name().to_owned();
        Ok(users
            .into_iter()
            .map(|user| UserProfile::new(user, Some(display_name.clone())))
            .collect())
    }

    async fn all_profiles(&self) -> Result<Vec<UserProfile>, Error> {
        let users = self.users.find_all().await?;
        self.to_profiles(users).await
    }

    async fn study_fields(&self) -> Result<Vec<StudyField>, Error> {
        Ok(self.study_fields.find_all().await?)
    }
}

#[async_trait]
impl<U, S> UsersCommand for UserDirectoryService<U, S>
where
    U: UserDirectory + ?Sized,
    S: StudyFieldDirectory + ?Sized,
{
    async fn create_user(&self, draft: UserDraft) -> Result<UserId, Error> {
        self.policy
            .authorize_user_mutation(UserMutation::Create, None)
            .await?;
        let user = self.users.save(draft).await?;
        info!(user_id = %user.id(), "user created");
        Ok(user.id().clone())
    }

    async fn update_study_field(
        &self,
        id: Option<UserId>,
        study_field_id: Option<StudyFieldId>,
    ) -> Result<Option<UserProfile>, Error> {
        let Some(id) = id else {
            debug!("study field update ignored: no user id");
            return Ok(None);
        };
        self.policy
            .authorize_user_mutation(UserMutation::UpdateStudyField, Some(&id))
            .await?;
        self.users
            .update_study_field(&id, study_field_id.clone())
            .await?;
        info!(
            user_id = %id,
            study_field_id = study_field_id.as_ref().map(AsRef::<str>::as_ref),
            "user study field updated"
        );
        self.find_profile(&id).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<DeleteOutcome, Error> {
        self.policy
            .authorize_user_mutation(UserMutation::Delete, Some(id))
            .await?;
        if self.users.find_by_id(id).await?.is_none() {
            debug!(user_id = %id, "delete skipped: no such user");
            return Ok(DeleteOutcome::NotFound);
        }
        self.users.delete_by_id(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
