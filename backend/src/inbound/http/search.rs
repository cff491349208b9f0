//! Search HTTP handlers.
//!
//! ```text
//! GET /rest/v1/search?query=Anna%20Olsen&maxResults=20
//! GET /rest/v1/search/users?query=Anna%20Olsen
//! GET /rest/v1/search/pages?query=Westerdals%20Kor
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::search::{SearchRequest, SearchResult};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SearchResultSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{default_max_results, parse_budget};

/// Query string shared by the search endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct SearchParams {
    /// Free-text query, matched exactly (case-sensitive).
    pub query: String,
    /// Result budget; defaults to 20 and must be at least 1.
    #[serde(default = "default_max_results")]
    #[param(default = 20, minimum = 1)]
    pub max_results: i64,
}

impl SearchParams {
    fn into_request(self) -> ApiResult<SearchRequest> {
        let budget = parse_budget(self.max_results)?;
        Ok(SearchRequest::new(self.query, budget))
    }
}

/// Search users and pages.
///
/// User hits come first, then page hits. Each part is bounded by
/// `maxResults` separately unless the server shares the budget.
#[utoipa::path(
    get,
    path = "/rest/v1/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Tagged search hits", body = [SearchResultSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "searchAll"
)]
#[get("/search")]
pub async fn search_all(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<SearchResult>>> {
    let request = params.into_inner().into_request()?;
    let results = state.search.search_all(&request).await?;
    Ok(web::Json(results))
}

/// Search users by name.
///
/// Responds with JSON `null` when the query has more than four parts.
#[utoipa::path(
    get,
    path = "/rest/v1/search/users",
    params(SearchParams),
    responses(
        (status = 200, description = "Tagged user hits, or null", body = [SearchResultSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "searchUsers"
)]
#[get("/search/users")]
pub async fn search_users(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Option<Vec<SearchResult>>>> {
    let request = params.into_inner().into_request()?;
    let results = state.search.search_users(&request).await?;
    Ok(web::Json(results))
}

/// Search pages by exact name.
#[utoipa::path(
    get,
    path = "/rest/v1/search/pages",
    params(SearchParams),
    responses(
        (status = 200, description = "Tagged page hits", body = [SearchResultSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Directory unavailable", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "searchPages"
)]
#[get("/search/pages")]
pub async fn search_pages(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<SearchResult>>> {
    let request = params.into_inner().into_request()?;
    let results = state.search.search_pages(&request).await?;
    Ok(web::Json(results))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
