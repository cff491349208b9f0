//! Two-pass user name search.
//!
//! 1. Full-name pass: every left/right split of the query parts is looked up
//!    as an exact (first name, surname) pair, in ascending split order,
//!    stopping as soon as the budget is full.
//! 2. Surname-only pass: when budget remains, the whole query is looked up as
//!    a surname, limited to the remaining budget, skipping users already
//!    found.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::UserDirectory;
use crate::domain::search::{NameQuery, SearchRequest};
use crate::domain::{Error, User};

/// Outcome of a name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSearchOutcome {
    /// Users found, in discovery order, never more than the budget.
    Matches(Vec<User>),
    /// The query has too many parts to be searched.
    Unsupported,
}

impl NameSearchOutcome {
    /// Matches, treating an unsupported query as no matches.
    pub fn into_matches(self) -> Vec<User> {
        match self {
            Self::Matches(users) => users,
            Self::Unsupported => Vec::new(),
        }
    }

    /// Matches, or `None` for an unsupported query.
    pub fn supported(self) -> Option<Vec<User>> {
        match self {
            Self::Matches(users) => Some(users),
            Self::Unsupported => None,
        }
    }
}

/// Stateless name search over a [`UserDirectory`].
pub struct NameSearchEngine<U: ?Sized> {
    users: Arc<U>,
}

impl<U: ?Sized> Clone for NameSearchEngine<U> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<U> NameSearchEngine<U>
where
    U: UserDirectory + ?Sized,
{
    /// Create an engine reading from `users`.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Run both passes for `request`.
    ///
    /// # Errors
    /// Propagates user directory failures.
    pub async fn search(&self, request: &SearchRequest) -> Result<NameSearchOutcome, Error> {
        let query = NameQuery::parse(request.query());
        if query.is_unsupported() {
            debug!(
                parts = query.parts().len(),
                "name search skipped: query has too many parts"
            );
            return Ok(NameSearchOutcome::Unsupported);
        }

        let mut found = self.full_name_pass(&query, request).await?;
        let budget = request.budget();
        if !budget.is_filled_by(found.len()) {
            self.surname_pass(&query, budget.remaining(found.len()), &mut found)
                .await?;
        }

        debug!(matches = found.len(), "name search complete");
        Ok(NameSearchOutcome::Matches(found))
    }

    async fn full_name_pass(
        &self,
        query: &NameQuery<'_>,
        request: &SearchRequest,
    ) -> Result<Vec<User>, Error> {
        let budget = request.budget();
        let mut found = Vec::new();
        for partition in query.partitions() {
            let hit = self
                .users
                .find_by_full_name(&partition.first_name, &partition.surname)
                .await?;
            if let Some(user) = hit {
                debug!(
                    split_index = partition.split_index,
                    user_id = %user.id(),
                    "full-name match"
                );
                found.push(user);
            }
            if budget.is_filled_by(found.len()) {
                break;
            }
        }
        Ok(found)
    }

    async fn surname_pass(
        &self,
        query: &NameQuery<'_>,
        limit: usize,
        found: &mut Vec<User>,
    ) -> Result<(), Error> {
        let candidates = self.users.find_by_surname(query.raw(), limit).await?;
        for candidate in candidates.into_iter().take(limit) {
            if !found.iter().any(|user| user.is_same_record(&candidate)) {
                found.push(candidate);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "name_search_tests.rs"]
mod tests;
