//! Domain primitives, ports, and services.
//!
//! Purpose: define strongly typed Westbook records and the search and user
//! use cases over them, independent of HTTP and storage. Adapters live in
//! [`crate::inbound`] and [`crate::outbound`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - User, UserDraft, UserProfile: user records as stored and as presented.
//! - Page, StudyField: records referenced by search and profiles.
//! - FederatedSearch, UserDirectoryService: driving port implementations.

pub mod error;
mod identifier;
pub mod page;
pub mod ports;
pub mod search;
pub mod study_field;
pub mod trace_id;
pub mod user;
mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::identifier::IdentifierValidationError;
pub use self::page::{Page, PageId};
pub use self::search::{BudgetPolicy, FederatedSearch, NameSearchEngine, SearchRequest};
pub use self::study_field::{StudyField, StudyFieldId};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId, UserProfile};
pub use self::user_service::{UserDirectoryService, decode_path_email};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use westbook::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
