//! Public pages (groups, societies, events) that appear in search results.

use serde::{Deserialize, Serialize};

use crate::domain::identifier::define_identifier;

define_identifier! {
    /// Stable page identifier assigned by the page directory.
    PageId => "page"
}

/// Page snapshot returned by the page directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    id: PageId,
    name: String,
}

impl Page {
    /// Build a page from its identifier and display name.
    pub fn new(id: PageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stable page identifier.
    pub fn id(&self) -> &PageId {
        &self.id
    }

    /// Display name, matched exactly by page search.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
