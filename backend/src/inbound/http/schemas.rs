//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their domain counterparts but
//! live in the inbound adapter layer where framework concerns belong.
#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa's derive"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The caller may not perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "maxResults must be at least 1 (got 0)")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
pub struct UserSchema {
    /// Store-assigned user identifier.
    #[schema(example = "5a1f0c2e9b7d4c3a8e6f1b2d")]
    id: String,
    #[schema(example = "Anna")]
    first_name: String,
    #[schema(example = "Olsen")]
    surname: String,
    #[schema(example = "anna.olsen@example.com")]
    email: String,
    /// Study field the user is enrolled in.
    study_field_id: Option<String>,
    profile_picture_id: Option<String>,
    profile_header_picture_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::UserProfile`].
///
/// A user with the study field's display name resolved.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile, rename_all = "camelCase")]
pub struct UserProfileSchema {
    id: String,
    first_name: String,
    surname: String,
    email: String,
    study_field_id: Option<String>,
    profile_picture_id: Option<String>,
    profile_header_picture_id: Option<String>,
    /// Name of the study field, when the user has one.
    #[schema(example = "Programmering")]
    study_field_display_name: Option<String>,
}

/// OpenAPI schema for [`crate::domain::UserDraft`].
///
/// Any `id` sent by the client is ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserDraft, rename_all = "camelCase")]
pub struct UserDraftSchema {
    first_name: String,
    surname: String,
    email: String,
    study_field_id: Option<String>,
    profile_picture_id: Option<String>,
    profile_header_picture_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Page`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Page)]
pub struct PageSchema {
    id: String,
    #[schema(example = "Westerdals Kor")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::StudyField`].
#[derive(ToSchema)]
#[schema(as = crate::domain::StudyField)]
pub struct StudyFieldSchema {
    id: String,
    #[schema(example = "Programmering")]
    name: String,
}

/// Discriminator values for [`SearchResultSchema`].
#[derive(ToSchema)]
#[schema(as = crate::domain::search::SearchResultKind)]
pub enum SearchResultKindSchema {
    #[schema(rename = "user")]
    User,
    #[schema(rename = "page")]
    Page,
}

/// OpenAPI schema for [`crate::domain::search::SearchResult`].
///
/// `payload` holds a user when `kind` is `user` and a page when it is `page`.
#[derive(ToSchema)]
#[schema(as = crate::domain::search::SearchResult)]
pub struct SearchResultSchema {
    kind: SearchResultKindSchema,
    /// The matching user or page.
    payload: serde_json::Value,
}
