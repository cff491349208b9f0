//! Driving port for the search endpoints.
//!
//! Handlers pass a validated [`SearchRequest`] and receive tagged hits; they
//! never see the directories behind the search.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::search::{SearchRequest, SearchResult};

/// Domain use-case port for free-text search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchQuery: Send + Sync {
    /// Users then pages matching the query, each part bounded by the budget.
    async fn search_all(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, Error>;

    /// User hits, or `None` when the query has too many name parts.
    async fn search_users(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<Vec<SearchResult>>, Error>;

    /// Page hits whose name matches the query exactly.
    async fn search_pages(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, Error>;
}
