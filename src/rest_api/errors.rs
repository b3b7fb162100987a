//! # REST API Errors
//!
//! Faults raised while handling a request, and the mapper that turns the
//! recognized ones into client responses.
//!
//! Only three faults are ever shown to a client: validation failures,
//! malformed bodies, and missing records. Everything else leaves the
//! handler as an `UnhandledError` and the HTTP layer answers with an opaque
//! 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::observability::Event;
use crate::schema::ValidationError;
use crate::store::StoreError;

use super::response::ApiResponse;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Payload of every 404
pub const NOT_FOUND_MESSAGE: &str = "Prayer not found";

/// Faults raised during a single request
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body parsed but violates the schema
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body is not parseable JSON
    #[error("invalid request body format: \"{0}\"")]
    MalformedBody(String),

    /// No record under the path id
    #[error("Prayer not found")]
    NotFound,

    // ==================
    // Unmapped
    // ==================
    /// Route did not supply a path parameter
    #[error("Missing required path parameter: {0}")]
    MissingPathParameter(String),

    /// Table failure
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RestError {
    /// Status a client sees for this fault, `None` if it is not mapped
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            RestError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            RestError::MalformedBody(_) => Some(StatusCode::BAD_REQUEST),
            RestError::NotFound => Some(StatusCode::NOT_FOUND),
            RestError::MissingPathParameter(_)
            | RestError::Store(_)
            | RestError::Serialization(_) => None,
        }
    }

    /// Map a fault to its client response, or hand it back as unhandled.
    pub fn into_api_response(self) -> Result<ApiResponse, UnhandledError> {
        let response = match self {
            RestError::Validation(err) => {
                tracing::info!(event = %Event::RequestRejected, reason = %err, "validation failed");
                ApiResponse::json(
                    StatusCode::BAD_REQUEST,
                    &json!({ "errors": err.messages() }),
                )?
            }
            err @ RestError::MalformedBody(_) => {
                tracing::info!(event = %Event::RequestRejected, reason = %err, "malformed body");
                ApiResponse::json(
                    StatusCode::BAD_REQUEST,
                    &json!({ "error": err.to_string() }),
                )?
            }
            RestError::NotFound => ApiResponse::json(
                StatusCode::NOT_FOUND,
                &json!({ "error": NOT_FOUND_MESSAGE }),
            )?,
            RestError::MissingPathParameter(name) => {
                return Err(UnhandledError::MissingPathParameter(name))
            }
            RestError::Store(err) => return Err(UnhandledError::Store(err)),
            RestError::Serialization(err) => return Err(UnhandledError::Serialization(err)),
        };

        Ok(response)
    }
}

/// A fault the mapper does not recognize
#[derive(Debug, Error)]
pub enum UnhandledError {
    #[error("Missing required path parameter: {0}")]
    MissingPathParameter(String),

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error response body for unhandled faults
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for UnhandledError {
    fn into_response(self) -> Response {
        tracing::error!(event = %Event::RequestFailed, error = %self, "unhandled fault");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(ErrorResponse {
            error: "Internal server error".to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
