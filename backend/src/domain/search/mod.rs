//! Name and page search.
//!
//! [`NameSearchEngine`] implements the two-pass user name search;
//! [`FederatedSearch`] combines it with page search and implements the
//! [`SearchQuery`](crate::domain::ports::SearchQuery) driving port.

mod federated;
mod name_query;
mod name_search;
mod result;

use std::fmt;
use std::num::NonZeroUsize;

pub use federated::{BudgetPolicy, FederatedSearch};
pub use name_query::{MAX_NAME_PARTS, NamePartition, NameQuery};
pub use name_search::{NameSearchEngine, NameSearchOutcome};
pub use result::{SearchResult, tag_pages, tag_users};

/// Result count used when a client does not ask for one.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Validation errors returned by [`ResultBudget::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultBudgetError {
    /// The requested budget was zero or negative.
    NotPositive {
        /// Value supplied by the caller.
        requested: i64,
    },
}

impl fmt::Display for ResultBudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { requested } => {
                write!(f, "maxResults must be at least 1 (got {requested})")
            }
        }
    }
}

impl std::error::Error for ResultBudgetError {}

/// Maximum number of records a single search call may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResultBudget(NonZeroUsize);

impl ResultBudget {
    /// Validate a client-supplied `maxResults` value.
    ///
    /// # Examples
    /// ```
    /// use westbook::domain::search::ResultBudget;
    ///
    /// assert_eq!(ResultBudget::new(5).map(|b| b.get()), Ok(5));
    /// assert!(ResultBudget::new(0).is_err());
    /// ```
    pub fn new(requested: i64) -> Result<Self, ResultBudgetError> {
        usize::try_from(requested)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(ResultBudgetError::NotPositive { requested })
    }

    /// Budget as a plain count.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Records still allowed once `used` have been collected.
    pub fn remaining(self, used: usize) -> usize {
        self.get().saturating_sub(used)
    }

    /// True once `collected` records fill the budget.
    pub fn is_filled_by(self, collected: usize) -> bool {
        collected >= self.get()
    }
}

impl Default for ResultBudget {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_MAX_RESULTS).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Free-text query plus its result budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    budget: ResultBudget,
}

impl SearchRequest {
    /// Build a request from a query and a validated budget.
    pub fn new(query: impl Into<String>, budget: ResultBudget) -> Self {
        Self {
            query: query.into(),
            budget,
        }
    }

    /// Query text exactly as received.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Result budget for this request.
    pub fn budget(&self) -> ResultBudget {
        self.budget
    }
}
