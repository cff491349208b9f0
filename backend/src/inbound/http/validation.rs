//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::search::{DEFAULT_MAX_RESULTS, ResultBudget};
use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidMaxResults,
    InvalidIdentifier,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidMaxResults => "invalid_max_results",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const MAX_RESULTS: FieldName = FieldName::new("maxResults");
pub(crate) const USER_ID: FieldName = FieldName::new("id");

fn invalid_value(field: FieldName, code: ErrorCode, message: String, value: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Serde default for `maxResults` query parameters.
pub(crate) fn default_max_results() -> i64 {
    i64::try_from(DEFAULT_MAX_RESULTS).unwrap_or(i64::MAX)
}

pub(crate) fn parse_budget(max_results: i64) -> Result<ResultBudget, Error> {
    ResultBudget::new(max_results).map_err(|err| {
        invalid_value(
            MAX_RESULTS,
            ErrorCode::InvalidMaxResults,
            err.to_string(),
            max_results.to_string(),
        )
    })
}

pub(crate) fn parse_user_id(value: String, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value.as_str()).map_err(|err| {
        invalid_value(field, ErrorCode::InvalidIdentifier, err.to_string(), value)
    })
}
