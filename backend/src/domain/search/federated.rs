//! Combined user and page search.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{PageDirectory, SearchQuery, UserDirectory};
use crate::domain::search::{
    NameSearchEngine, NameSearchOutcome, SearchRequest, SearchResult, tag_pages, tag_users,
};

/// How the combined search splits its budget between users and pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BudgetPolicy {
    /// Users and pages each receive the full budget, so a combined response
    /// may hold up to twice `maxResults` hits.
    #[default]
    Independent,
    /// Pages receive whatever the user search left over.
    Shared,
}

impl BudgetPolicy {
    /// Policy selected by the `shared_search_budget` setting.
    pub fn from_shared_flag(shared: bool) -> Self {
        if shared { Self::Shared } else { Self::Independent }
    }
}

/// [`SearchQuery`] implementation over user and page directories.
pub struct FederatedSearch<U: ?Sized, P: ?Sized> {
    names: NameSearchEngine<U>,
    pages: Arc<P>,
    policy: BudgetPolicy,
}

impl<U, P> FederatedSearch<U, P>
where
    U: UserDirectory + ?Sized,
    P: PageDirectory + ?Sized,
{
    /// Create a search service with independent budgets.
    pub fn new(users: Arc<U>, pages: Arc<P>) -> Self {
        Self {
            names: NameSearchEngine::new(users),
            pages,
            policy: BudgetPolicy::Independent,
        }
    }

    /// Replace the budget policy.
    pub fn with_policy(mut self, policy: BudgetPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn pages_by_name(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let pages = self.pages.find_by_name(query, limit, 0).await?;
        Ok(tag_pages(pages))
    }
}

#[async_trait]
impl<U, P> SearchQuery for FederatedSearch<U, P>
where
    U: UserDirectory + ?Sized,
    P: PageDirectory + ?Sized,
{
    async fn search_all(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, Error> {
        let outcome = self.names.search(request).await?;
        if outcome == NameSearchOutcome::Unsupported {
            debug!("combined search continues with pages only");
        }
        let mut results = tag_users(outcome.into_matches());

        let budget = request.budget();
        let page_limit = match self.policy {
            BudgetPolicy::Independent => budget.get(),
            BudgetPolicy::Shared => budget.remaining(results.len()),
        };
        results.extend(self.pages_by_name(request.query(), page_limit).await?);

        debug!(
            hits = results.len(),
            policy = ?self.policy,
            "combined search complete"
        );
        Ok(results)
    }

    async fn search_users(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<Vec<SearchResult>>, Error> {
        let outcome = self.names.search(request).await?;
        Ok(outcome.supported().map(tag_users))
    }

    async fn search_pages(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, Error> {
        self.pages_by_name(request.query(), request.budget().get())
            .await
    }
}
