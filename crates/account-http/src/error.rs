//! Error taxonomy for account API operations

use account_core::BadRequestData;
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors returned by [`crate::AccountClient`] operations.
///
/// Response status codes classify as follows: 404 becomes `NotFound`, 400
/// becomes `BadRequest` with the server-provided payload, and any other
/// status above 400 becomes `ResponseStatus`. Transport and decode failures
/// propagate to the caller unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum AccountHttpError {
    /// The server returned 404 for the requested address.
    #[error("Resource or endpoint not found: {url}")]
    NotFound { url: String },

    /// The server returned 400 with a structured error payload.
    #[error(
        "Bad request ({method}): error code {code}, message: {message}",
        code = .data.error_code,
        message = .data.error_message
    )]
    BadRequest { method: Method, data: BadRequestData },

    /// The server returned a non-success status other than 400 and 404.
    #[error("Error requesting ({method} {url}): status code {status}")]
    ResponseStatus {
        method: Method,
        url: String,
        status: StatusCode,
    },

    /// A fetch or delete was attempted with a blank resource id.
    #[error("Empty resource id for {operation}")]
    EmptyResourceId { operation: &'static str },

    /// The configured base URL produced an unparsable request address.
    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The configured mime type or bearer token is not a valid header value.
    #[error("Invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    /// Network-level failure, propagated from the transport verbatim.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body did not decode into the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
