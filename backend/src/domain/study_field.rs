//! Study fields users belong to.

use serde::{Deserialize, Serialize};

use crate::domain::identifier::define_identifier;

define_identifier! {
    /// Stable study-field identifier.
    StudyFieldId => "study field"
}

/// Study field with its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyField {
    id: StudyFieldId,
    name: String,
}

impl StudyField {
    /// Build a study field from its identifier and name.
    pub fn new(id: StudyFieldId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stable identifier referenced from user records.
    pub fn id(&self) -> &StudyFieldId {
        &self.id
    }

    /// Human-readable name used for lookups and display.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
