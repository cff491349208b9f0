//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST handler under `/rest/v1`, the health
//! probes, and the schema wrappers from
//! [`crate::inbound::http::schemas`] that describe domain types without
//! coupling them to utoipa.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, PageSchema, SearchResultKindSchema, SearchResultSchema,
    StudyFieldSchema, UserDraftSchema, UserProfileSchema, UserSchema,
};
use crate::inbound::http::users::StudyFieldUpdateRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Westbook REST API",
        description = "Student directory: user profiles, study fields, and name/page search."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::search::search_all,
        crate::inbound::http::search::search_users,
        crate::inbound::http::search::search_pages,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::users_by_name,
        crate::inbound::http::users::user_by_email,
        crate::inbound::http::users::users_by_study_field,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_study_fields,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        UserProfileSchema,
        UserDraftSchema,
        PageSchema,
        StudyFieldSchema,
        SearchResultSchema,
        SearchResultKindSchema,
        StudyFieldUpdateRequest,
    )),
    tags(
        (name = "search", description = "Federated user and page search"),
        (name = "users", description = "User profiles and mutations"),
        (name = "static", description = "Reference data"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
