//! # Response Formatting
//!
//! Handlers answer with an `ApiResponse`: integer status, headers, and an
//! already-encoded body. JSON responses always carry
//! `content-type: application/json`; the 204 from delete carries nothing.

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// Content type of every non-empty response
pub const APPLICATION_JSON: &str = "application/json";

/// Structured handler output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// JSON response with the given status
    pub fn json<T: Serialize + ?Sized>(
        status: StatusCode,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.as_str().to_string(), APPLICATION_JSON.to_string());

        Ok(Self {
            status_code: status.as_u16(),
            headers,
            body,
        })
    }

    /// 204 with no headers and an empty body
    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT.as_u16(),
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decode the body back into JSON
    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }

        (self.status(), headers, Body::from(self.body)).into_response()
    }
}
