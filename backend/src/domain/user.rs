//! User data model.
//!
//! Users are owned by the document store; the domain reads them as snapshots
//! and only ever writes whole drafts or the study-field reference.

use serde::{Deserialize, Serialize};

use crate::domain::StudyFieldId;
use crate::domain::identifier::define_identifier;

define_identifier! {
    /// Stable user identifier assigned by the user directory.
    UserId => "user"
}

/// Application user as stored in the user directory.
///
/// ## Invariants
/// - `id` is non-empty and carries no surrounding whitespace.
/// - Name fields are stored verbatim; the name search matches them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    first_name: String,
    surname: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    study_field_id: Option<StudyFieldId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_picture_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_header_picture_id: Option<String>,
}

impl User {
    /// Materialise a stored user from a draft and the identifier the store
    /// assigned to it.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            first_name,
            surname,
            email,
            study_field_id,
            profile_picture_id,
            profile_header_picture_id,
        } = draft;
        Self {
            id,
            first_name,
            surname,
            email,
            study_field_id,
            profile_picture_id,
            profile_header_picture_id,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name(s).
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Contact e-mail address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Study field the user belongs to, if any.
    pub fn study_field_id(&self) -> Option<&StudyFieldId> {
        self.study_field_id.as_ref()
    }

    /// Upload identifier of the profile picture.
    pub fn profile_picture_id(&self) -> Option<&str> {
        self.profile_picture_id.as_deref()
    }

    /// Upload identifier of the profile header picture.
    pub fn profile_header_picture_id(&self) -> Option<&str> {
        self.profile_header_picture_id.as_deref()
    }

    /// Return a copy pointing at a different study field.
    #[must_use]
    pub fn with_study_field(mut self, study_field_id: Option<StudyFieldId>) -> Self {
        self.study_field_id = study_field_id;
        self
    }

    /// True when `self` and `other` refer to the same stored record.
    pub fn is_same_record(&self, other: &User) -> bool {
        self.id == other.id
    }
}

/// User fields supplied when creating a user; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Given name(s).
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub surname: String,
    /// Contact e-mail address.
    #[serde(default)]
    pub email: String,
    /// Optional study field reference.
    #[serde(default)]
    pub study_field_id: Option<StudyFieldId>,
    /// Optional profile picture upload id.
    #[serde(default)]
    pub profile_picture_id: Option<String>,
    /// Optional profile header picture upload id.
    #[serde(default)]
    pub profile_header_picture_id: Option<String>,
}

impl UserDraft {
    /// Start a draft with the mandatory name and e-mail fields.
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Attach a study field reference.
    #[must_use]
    pub fn with_study_field(mut self, study_field_id: StudyFieldId) -> Self {
        self.study_field_id = Some(study_field_id);
        self
    }
}

/// User as presented to API clients: the stored record plus the resolved
/// study-field display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    user: User,
    study_field_display_name: Option<String>,
}

impl UserProfile {
    /// Combine a user with its resolved study-field display name.
    pub fn new(user: User, study_field_display_name: Option<String>) -> Self {
        Self {
            user,
            study_field_display_name,
        }
    }

    /// Underlying user record.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Human-readable study-field name, when resolvable.
    pub fn study_field_display_name(&self) -> Option<&str> {
        self.study_field_display_name.as_deref()
    }
}
