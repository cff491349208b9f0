//! Tagged search hits.

use serde::{Deserialize, Serialize};

use crate::domain::{Page, User};

/// A single search hit, tagged by the kind of record it wraps.
///
/// Serialised as `{"kind": "user", "payload": {...}}` or
/// `{"kind": "page", "payload": {...}}`. Position in the result list is the
/// only ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum SearchResult {
    /// A matching user.
    User(User),
    /// A matching page.
    Page(Page),
}

impl SearchResult {
    /// Discriminator used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Page(_) => "page",
        }
    }
}

impl From<User> for SearchResult {
    fn from(value: User) -> Self {
        Self::User(value)
    }
}

impl From<Page> for SearchResult {
    fn from(value: Page) -> Self {
        Self::Page(value)
    }
}

/// Tag every user as a search hit, preserving order.
pub fn tag_users(users: Vec<User>) -> Vec<SearchResult> {
    users.into_iter().map(SearchResult::User).collect()
}

/// Tag every page as a search hit, preserving order.
pub fn tag_pages(pages: Vec<Page>) -> Vec<SearchResult> {
    pages.into_iter().map(SearchResult::Page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageId, UserDraft, UserId};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_hits_serialise_with_kind_and_payload() {
        let user = User::from_draft(
            UserId::new("u-1").expect("user id"),
            UserDraft::new("Anna", "Olsen", "anna@example.com"),
        );
        let value = serde_json::to_value(SearchResult::from(user)).expect("serialise hit");
        assert_eq!(
            value,
            json!({
                "kind": "user",
                "payload": {
                    "id": "u-1",
                    "firstName": "Anna",
                    "surname": "Olsen",
                    "email": "anna@example.com",
                }
            })
        );
    }

    #[rstest]
    fn page_hits_serialise_with_kind_and_payload() {
        let page = Page::new(PageId::new("p-1").expect("page id"), "Westerdals Kor");
        let hit = SearchResult::from(page);
        assert_eq!(hit.kind(), "page");
        let value = serde_json::to_value(&hit).expect("serialise hit");
        assert_eq!(
            value,
            json!({"kind": "page", "payload": {"id": "p-1", "name": "Westerdals Kor"}})
        );
    }

    #[rstest]
    fn tagging_preserves_order() {
        let pages = vec![
            Page::new(PageId::new("p-2").expect("page id"), "B"),
            Page::new(PageId::new("p-1").expect("page id"), "A"),
        ];
        let tagged = tag_pages(pages);
        let ids: Vec<&str> = tagged
            .iter()
            .map(|hit| match hit {
                SearchResult::Page(page) => page.id().as_ref(),
                SearchResult::User(user) => user.id().as_ref(),
            })
            .collect();
        assert_eq!(ids, vec!["p-2", "p-1"]);
    }
}
