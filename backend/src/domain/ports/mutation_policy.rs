//! Driven port deciding whether a caller may mutate user records.
//!
//! Westbook has never enforced access levels on user mutations. The port
//! exists so that enforcement can be added behind it; the only shipped policy
//! lets every mutation through and records that it did so.

use std::fmt;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{Error, UserId};

/// Mutation being attempted against the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMutation {
    /// `POST /users`.
    Create,
    /// `PATCH /users`.
    UpdateStudyField,
    /// `DELETE /users/{id}`.
    Delete,
}

impl fmt::Display for UserMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Create => "create",
            Self::UpdateStudyField => "update_study_field",
            Self::Delete => "delete",
        };
        f.write_str(label)
    }
}

/// Access decision point for user mutations.
#[async_trait]
pub trait MutationPolicy: Send + Sync {
    /// Return `Ok(())` when the mutation may proceed.
    async fn authorize_user_mutation(
        &self,
        mutation: UserMutation,
        target: Option<&UserId>,
    ) -> Result<(), Error>;
}

/// Policy that performs no access check at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnrestrictedMutationPolicy;

#[async_trait]
impl MutationPolicy for UnrestrictedMutationPolicy {
    async fn authorize_user_mutation(
        &self,
        mutation: UserMutation,
        target: Option<&UserId>,
    ) -> Result<(), Error> {
        warn!(
            %mutation,
            target = target.map(AsRef::as_ref),
            "user mutation permitted without an access check"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserMutation::Create, None)]
    #[case(UserMutation::UpdateStudyField, Some("u-1"))]
    #[case(UserMutation::Delete, Some("u-2"))]
    #[tokio::test]
    async fn unrestricted_policy_permits_everything(
        #[case] mutation: UserMutation,
        #[case] target: Option<&str>,
    ) {
        let target = target.map(|raw| UserId::new(raw).expect("user id"));
        let outcome = UnrestrictedMutationPolicy
            .authorize_user_mutation(mutation, target.as_ref())
            .await;
        assert!(outcome.is_ok());
    }

    #[rstest]
    fn mutations_have_stable_labels() {
        assert_eq!(UserMutation::Create.to_string(), "create");
        assert_eq!(
            UserMutation::UpdateStudyField.to_string(),
            "update_study_field"
        );
        assert_eq!(UserMutation::Delete.to_string(), "delete");
    }
}
