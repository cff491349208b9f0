//! Driven port for study-field reference data.

use async_trait::async_trait;

use crate::domain::{StudyField, StudyFieldId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by study-field directory adapters.
    pub enum StudyFieldDirectoryError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "study field directory connection failed: {message}" as service_unavailable,
        /// A read failed during execution.
        Query { message: String } =>
            "study field directory query failed: {message}" as internal,
    }
}

/// Capability contract for resolving study fields.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudyFieldDirectory: Send + Sync {
    /// Resolve a study field by its human-readable name.
    async fn find_by_name(&self, name: &str)
    -> Result<Option<StudyField>, StudyFieldDirectoryError>;

    /// Resolve a study field by identifier.
    async fn find_by_id(
        &self,
        id: &StudyFieldId,
    ) -> Result<Option<StudyField>, StudyFieldDirectoryError>;

    /// Return every known study field.
    async fn find_all(&self) -> Result<Vec<StudyField>, StudyFieldDirectoryError>;
}
