//! # Prayer Handlers
//!
//! One operation per method. Each one runs its steps against the injected
//! store and passes any fault through the error mapper before returning:
//!
//! - create: parse -> validate -> generate id -> put -> 201
//! - get:    fetch -> 200
//! - update: fetch -> parse -> validate -> put (id forced to path id) -> 200
//! - delete: fetch -> delete -> 204
//! - list:   scan -> 200

use std::sync::Arc;

use axum::http::StatusCode;

use crate::model::{Prayer, PrayerDraft};
use crate::observability::Event;
use crate::schema::SchemaValidator;
use crate::store::PrayerStore;

use super::errors::{RestError, RestResult, UnhandledError};
use super::request::{ApiRequest, ID_PARAM};
use super::response::ApiResponse;

/// Outcome of a handler after error mapping
pub type HandlerResult = Result<ApiResponse, UnhandledError>;

/// Request handlers for the prayer resource
#[derive(Clone)]
pub struct PrayerHandler {
    store: Arc<dyn PrayerStore>,
}

impl PrayerHandler {
    pub fn new(store: Arc<dyn PrayerStore>) -> Self {
        Self { store }
    }

    /// The table this handler writes to
    pub fn store(&self) -> &Arc<dyn PrayerStore> {
        &self.store
    }

    /// Create a prayer from the request body
    pub async fn create(&self, request: &ApiRequest) -> HandlerResult {
        fault_boundary(self.try_create(request).await)
    }

    /// Read the prayer named by the path id
    pub async fn get(&self, request: &ApiRequest) -> HandlerResult {
        fault_boundary(self.try_get(request).await)
    }

    /// Replace the prayer named by the path id
    pub async fn update(&self, request: &ApiRequest) -> HandlerResult {
        fault_boundary(self.try_update(request).await)
    }

    /// Delete the prayer named by the path id
    pub async fn delete(&self, request: &ApiRequest) -> HandlerResult {
        fault_boundary(self.try_delete(request).await)
    }

    /// List every prayer in the table
    pub async fn list(&self, _request: &ApiRequest) -> HandlerResult {
        fault_boundary(self.try_list().await)
    }

    async fn try_create(&self, request: &ApiRequest) -> RestResult<ApiResponse> {
        let draft = parse_draft(request)?;
        let prayer = Prayer::create(draft);

        self.store.put(&prayer).await?;

        tracing::info!(event = %Event::PrayerCreated, prayer_id = %prayer.prayer_id, "prayer created");
        Ok(ApiResponse::json(StatusCode::CREATED, &prayer)?)
    }

    async fn try_get(&self, request: &ApiRequest) -> RestResult<ApiResponse> {
        let id = request.path_parameter(ID_PARAM)?;
        let prayer = self.fetch_prayer(id).await?;

        tracing::debug!(event = %Event::PrayerRead, prayer_id = %id, "prayer read");
        Ok(ApiResponse::json(StatusCode::OK, &prayer)?)
    }

    async fn try_update(&self, request: &ApiRequest) -> RestResult<ApiResponse> {
        let id = request.path_parameter(ID_PARAM)?;
        self.fetch_prayer(id).await?;

        let draft = parse_draft(request)?;
        let prayer = Prayer::from_draft(id, draft);

        self.store.put(&prayer).await?;

        tracing::info!(event = %Event::PrayerUpdated, prayer_id = %id, "prayer updated");
        Ok(ApiResponse::json(StatusCode::OK, &prayer)?)
    }

    async fn try_delete(&self, request: &ApiRequest) -> RestResult<ApiResponse> {
        let id = request.path_parameter(ID_PARAM)?;
        self.fetch_prayer(id).await?;

        self.store.delete(id).await?;

        tracing::info!(event = %Event::PrayerDeleted, prayer_id = %id, "prayer deleted");
        Ok(ApiResponse::no_content())
    }

    async fn try_list(&self) -> RestResult<ApiResponse> {
        let prayers = self.store.scan().await?;

        tracing::debug!(event = %Event::PrayersListed, count = prayers.len(), "prayers listed");
        Ok(ApiResponse::json(StatusCode::OK, &prayers)?)
    }

    /// Fetch by id, turning an absent key into `NotFound`
    async fn fetch_prayer(&self, id: &str) -> RestResult<Prayer> {
        match self.store.get(id).await? {
            Some(prayer) => Ok(prayer),
            None => {
                tracing::info!(event = %Event::PrayerNotFound, prayer_id = %id, "prayer not found");
                Err(RestError::NotFound)
            }
        }
    }
}

/// Parse and validate the body into a draft
fn parse_draft(request: &ApiRequest) -> RestResult<PrayerDraft> {
    let candidate = request.json_body()?;
    SchemaValidator::prayer().validate(&candidate)?;
    Ok(serde_json::from_value(candidate)?)
}

fn fault_boundary(result: RestResult<ApiResponse>) -> HandlerResult {
    result.or_else(RestError::into_api_response)
}
