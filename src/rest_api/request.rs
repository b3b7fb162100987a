//! # Request Envelope
//!
//! What a handler is invoked with: path parameters and an optional raw
//! body. The HTTP layer fills this in from the axum request.

use std::collections::HashMap;

use serde_json::Value;

use super::errors::{RestError, RestResult};

/// Path parameter carrying the record identifier
pub const ID_PARAM: &str = "id";

/// Structured handler input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub path_parameters: HashMap<String, String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Request addressed to one record
    pub fn for_id(id: impl Into<String>) -> Self {
        Self::new().with_path_parameter(ID_PARAM, id)
    }

    /// Get a path parameter, failing if the route did not supply it
    pub fn path_parameter(&self, name: &str) -> RestResult<&str> {
        self.path_parameters
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RestError::MissingPathParameter(name.to_string()))
    }

    /// Parse the body as JSON.
    ///
    /// An absent body parses like an empty one, so both are malformed.
    pub fn json_body(&self) -> RestResult<Value> {
        let raw = self.body.as_deref().unwrap_or("");
        serde_json::from_str(raw).map_err(|e| RestError::MalformedBody(e.to_string()))
    }
}
