//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Extractor rejections (bad query strings, path segments, or bodies)
//! are routed through the same envelope.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    error!(message = error.message(), "internal error redacted from response");
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.clone().try_with_trace_id(id).unwrap_or(redacted),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

fn rejection(source: &str, detail: String) -> Error {
    debug!(source, %detail, "request rejected by extractor");
    Error::invalid_request(format!("invalid {source}")).with_details(json!({
        "source": source,
        "reason": detail,
    }))
}

/// Error handler for `web::QueryConfig`.
pub fn query_rejection(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection("query string", err.to_string()).into()
}

/// Error handler for `web::PathConfig`.
pub fn path_rejection(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejection("path", err.to_string()).into()
}

/// Error handler for `web::JsonConfig`.
pub fn json_rejection(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection("request body", err.to_string()).into()
}
