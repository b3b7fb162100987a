//! # REST API Routes
//!
//! Axum adapter over `PrayerHandler`: each route builds an `ApiRequest`
//! from the path and raw body, then returns the handler's response as is.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Router,
};

use super::errors::{RestError, RestResult};
use super::handler::{HandlerResult, PrayerHandler};
use super::request::ApiRequest;

/// Build the prayers router
pub fn prayer_routes(handler: PrayerHandler) -> Router {
    Router::new()
        .route("/prayers", get(list_handler).post(create_handler))
        .route(
            "/prayers/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(handler)
}

/// Decode the raw body. Bytes that are not UTF-8 make the body malformed.
fn body_text(body: Bytes) -> RestResult<String> {
    String::from_utf8(body.to_vec()).map_err(|e| RestError::MalformedBody(e.to_string()))
}

/// List prayers handler
async fn list_handler(State(handler): State<PrayerHandler>) -> HandlerResult {
    handler.list(&ApiRequest::new()).await
}

/// Create prayer handler
async fn create_handler(State(handler): State<PrayerHandler>, body: Bytes) -> HandlerResult {
    match body_text(body) {
        Ok(text) => handler.create(&ApiRequest::new().with_body(text)).await,
        Err(e) => e.into_api_response(),
    }
}

/// Get prayer handler
async fn get_handler(
    State(handler): State<PrayerHandler>,
    Path(params): Path<HashMap<String, String>>,
) -> HandlerResult {
    let request = ApiRequest {
        path_parameters: params,
        body: None,
    };
    handler.get(&request).await
}

/// Update prayer handler
async fn update_handler(
    State(handler): State<PrayerHandler>,
    Path(params): Path<HashMap<String, String>>,
    body: Bytes,
) -> HandlerResult {
    let text = match body_text(body) {
        Ok(text) => text,
        Err(e) => return e.into_api_response(),
    };
    let request = ApiRequest {
        path_parameters: params,
        body: Some(text),
    };
    handler.update(&request).await
}

/// Delete prayer handler
async fn delete_handler(
    State(handler): State<PrayerHandler>,
    Path(params): Path<HashMap<String, String>>,
) -> HandlerResult {
    let request = ApiRequest {
        path_parameters: params,
        body: None,
    };
    handler.delete(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryTable, PrayerStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_router() -> (Arc<MemoryTable>, Router) {
        let table = Arc::new(MemoryTable::new("Prayers"));
        let router = prayer_routes(PrayerHandler::new(table.clone()));
        (table, router)
    }

    /// A valid prayer body whose `name` value is the single byte 0xff.
    fn invalid_utf8_body() -> Vec<u8> {
        let mut body = br#"{"name":""#.to_vec();
        body.push(0xff);
        body.extend_from_slice(
            br#"","verse":"v","passage":"p","percentageComplete":1,"read":true}"#,
        );
        body
    }

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Vec<u8>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_body_text_accepts_utf8() {
        let body = Bytes::from_static("{\"name\":\"ψ\"}".as_bytes());
        assert_eq!(body_text(body).unwrap(), "{\"name\":\"ψ\"}");
    }

    #[test]
    fn test_body_text_rejects_invalid_utf8() {
        let body = Bytes::from_static(&[b'{', 0xff, b'}']);
        assert!(matches!(body_text(body), Err(RestError::MalformedBody(_))));
    }

    #[tokio::test]
    async fn test_create_with_invalid_utf8_is_malformed() {
        let (table, router) = create_test_router();

        let (status, body) = send(router, Method::POST, "/prayers", invalid_utf8_body()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request body format: \""));
        assert!(table.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_with_invalid_utf8_is_malformed() {
        let (table, router) = create_test_router();
        let existing = crate::model::Prayer::create(
            serde_json::from_value(serde_json::json!({
                "name": "Ps 23",
                "verse": "v1",
                "passage": "p",
                "percentageComplete": 0,
                "read": false
            }))
            .unwrap(),
        );
        table.put(&existing).await.unwrap();

        let uri = format!("/prayers/{}", existing.prayer_id);
        let (status, _) = send(router, Method::PUT, &uri, invalid_utf8_body()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(table.get(&existing.prayer_id).await.unwrap(), Some(existing));
    }
}
