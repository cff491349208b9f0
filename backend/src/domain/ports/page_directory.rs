//! Driven port for the page document collection.

use async_trait::async_trait;

use crate::domain::Page;

use super::define_port_error;

define_port_error! {
    /// Errors raised by page directory adapters.
    pub enum PageDirectoryError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "page directory connection failed: {message}" as service_unavailable,
        /// A read failed during execution.
        Query { message: String } =>
            "page directory query failed: {message}" as internal,
    }
}

/// Capability contract for page name lookups.
///
/// Paging is native to the store: `offset` records are skipped, then at most
/// `limit` are returned in store order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageDirectory: Send + Sync {
    /// Return pages whose name matches `name` exactly.
    async fn find_by_name(
        &self,
        name: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Page>, PageDirectoryError>;
}
