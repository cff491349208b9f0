//! Users API handlers.
//!
//! ```text
//! GET    /rest/v1/users
//! GET    /rest/v1/users/{id}
//! GET    /rest/v1/users/by-name/{name}?maxResults=20
//! GET    /rest/v1/users/by-email/{email}
//! GET    /rest/v1/users/by-studyfield/{name}
//! POST   /rest/v1/users     {"firstName":"Anna","surname":"Olsen",...}
//! PATCH  /rest/v1/users     {"id":"...","studyFieldId":"..."}
//! DELETE /rest/v1/users/{id}
//! ```
//!
//! Lookups that find nothing answer `200` with JSON `null`. The mutation
//! endpoints keep their plain-text acknowledgements.

use actix_web::{HttpResponse, delete, get, http::header::ContentType, patch, post, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::DeleteOutcome;
use crate::domain::search::SearchRequest;
use crate::domain::{StudyField, StudyFieldId, UserDraft, UserId, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, StudyFieldSchema, UserDraftSchema, UserProfileSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    USER_ID, default_max_results, parse_budget, parse_user_id,
};

/// Query string for `GET /users/by-name/{name}`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct NameLookupParams {
    /// Result budget; defaults to 20 and must be at least 1.
    #[serde(default = "default_max_results")]
    #[param(default = 20, minimum = 1)]
    pub max_results: i64,
}

/// Request body for `PATCH /users`.
///
/// Only `id` and `studyFieldId` are read; other user fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyFieldUpdateRequest {
    /// User to update. Without it the request is a no-op answered with `null`.
    #[schema(value_type = Option<String>)]
    pub id: Option<UserId>,
    /// New study field, or `null` to clear it.
    #[schema(value_type = Option<String>)]
    pub study_field_id: Option<StudyFieldId>,
}

fn plain_text(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

/// List every user.
#[utoipa::path(
    get,
    path = "/rest/v1/users",
    responses(
        (status = 200, description = "Users in store order", body = [UserProfileSchema]),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserProfile>>> {
    Ok(web::Json(state.users.all_profiles().await?))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/rest/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user, or null", body = UserProfileSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<UserProfile>>> {
    let id = parse_user_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.users.profile(&id).await?))
}

/// Find users by name using the two-pass name search.
///
/// Responds with JSON `null` when the name has more than four parts.
#[utoipa::path(
    get,
    path = "/rest/v1/users/by-name/{name}",
    params(("name" = String, Path, description = "Free-text name"), NameLookupParams),
    responses(
        (status = 200, description = "Matching users, or null", body = [UserProfileSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUsersByName"
)]
#[get("/users/by-name/{name}")]
pub async fn users_by_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<NameLookupParams>,
) -> ApiResult<web::Json<Option<Vec<UserProfile>>>> {
    let budget = parse_budget(params.max_results)?;
    let request = SearchRequest::new(path.into_inner(), budget);
    Ok(web::Json(state.users.profiles_by_name(&request).await?))
}

/// Find a user by e-mail address.
///
/// Path-safe addresses replace every `.` with `_`.
#[utoipa::path(
    get,
    path = "/rest/v1/users/by-email/{email}",
    params(("email" = String, Path, description = "Address with `_` in place of `.`")),
    responses(
        (status = 200, description = "The user, or null", body = UserProfileSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUserByEmail"
)]
#[get("/users/by-email/{email}")]
pub async fn user_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<UserProfile>>> {
    Ok(web::Json(state.users.profile_by_email(&path).await?))
}

/// List users enrolled in a study field, looked up by name.
#[utoipa::path(
    get,
    path = "/rest/v1/users/by-studyfield/{name}",
    params(("name" = String, Path, description = "Study field name")),
    responses(
        (status = 200, description = "Enrolled users; empty for unknown fields", body = [UserProfileSchema]),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUsersByStudyField"
)]
#[get("/users/by-studyfield/{name}")]
pub async fn users_by_study_field(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<UserProfile>>> {
    Ok(web::Json(state.users.profiles_by_study_field(&path).await?))
}

/// Create a user.
///
/// Answers `<id>-OK` as plain text with the store-assigned id.
#[utoipa::path(
    post,
    path = "/rest/v1/users",
    request_body = UserDraftSchema,
    responses(
        (status = 200, description = "Created", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDraft>,
) -> ApiResult<HttpResponse> {
    let id = state.users_command.create_user(payload.into_inner()).await?;
    Ok(plain_text(format!("{id}-OK\n")))
}

/// Change a user's study field and return the re-read user.
#[utoipa::path(
    patch,
    path = "/rest/v1/users",
    request_body = StudyFieldUpdateRequest,
    responses(
        (status = 200, description = "The updated user, or null", body = UserProfileSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUserStudyField"
)]
#[patch("/users")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<StudyFieldUpdateRequest>,
) -> ApiResult<web::Json<Option<UserProfile>>> {
    let StudyFieldUpdateRequest { id, study_field_id } = payload.into_inner();
    let profile = state
        .users_command
        .update_study_field(id, study_field_id)
        .await?;
    Ok(web::Json(profile))
}

/// Delete a user.
///
/// Answers `OK` or `COULD NOT FIND USER` as plain text.
#[utoipa::path(
    delete,
    path = "/rest/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Outcome", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(path.into_inner(), USER_ID)?;
    let body = match state.users_command.delete_user(&id).await? {
        DeleteOutcome::Deleted => "OK\n",
        DeleteOutcome::NotFound => "COULD NOT FIND USER\n",
    };
    Ok(plain_text(body.to_owned()))
}

/// List every study field.
#[utoipa::path(
    get,
    path = "/rest/v1/static/studyfield",
    responses(
        (status = 200, description = "Study fields", body = [StudyFieldSchema]),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["static"],
    operation_id = "listStudyFields"
)]
#[get("/static/studyfield")]
pub async fn list_study_fields(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<StudyField>>> {
    Ok(web::Json(state.users.study_fields().await?))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
