//! Prayer Handler Tests
//!
//! End-to-end handler behavior against an in-memory table:
//! - Create generates ids and persists only valid records
//! - Unknown ids are 404 for read, update and delete
//! - Update replaces wholesale and keeps the path id
//! - Store failures leave the handler unmapped

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use prayers::rest_api::NOT_FOUND_MESSAGE;
use prayers::store::StoreResult;
use prayers::{
    ApiRequest, MemoryTable, Prayer, PrayerHandler, PrayerStore, StoreError, UnhandledError,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (Arc<MemoryTable>, PrayerHandler) {
    let table = Arc::new(MemoryTable::new("Prayers"));
    let handler = PrayerHandler::new(table.clone());
    (table, handler)
}

fn psalm() -> Value {
    json!({
        "name": "Ps 23",
        "verse": "v1",
        "passage": "The Lord is my shepherd",
        "percentageComplete": 0,
        "read": false
    })
}

async fn create_ok(handler: &PrayerHandler, body: &Value) -> Value {
    let response = handler
        .create(&ApiRequest::new().with_body(body.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status_code, 201);
    response.json_body().unwrap()
}

fn id_of(record: &Value) -> String {
    record["prayerID"].as_str().unwrap().to_string()
}

/// Table that fails every call.
struct UnavailableTable;

#[async_trait]
impl PrayerStore for UnavailableTable {
    fn table_name(&self) -> &str {
        "Prayers"
    }

    async fn put(&self, _prayer: &Prayer) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _id: &str) -> StoreResult<Option<Prayer>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _id: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn scan(&self) -> StoreResult<Vec<Prayer>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

// =============================================================================
// Create
// =============================================================================

/// The documented scenario: four fields echoed back plus a generated id.
#[tokio::test]
async fn test_create_scenario() {
    let (table, handler) = setup();

    let response = handler
        .create(&ApiRequest::new().with_body(psalm().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.header("content-type"), Some("application/json"));

    let created = response.json_body().unwrap();
    assert_eq!(created["name"], "Ps 23");
    assert_eq!(created["verse"], "v1");
    assert_eq!(created["passage"], "The Lord is my shepherd");
    assert_eq!(created["percentageComplete"], json!(0));
    assert_eq!(created["read"], false);
    assert!(uuid::Uuid::parse_str(&id_of(&created)).is_ok());

    assert_eq!(table.len().await, 1);
}

/// A client-supplied id is replaced.
#[tokio::test]
async fn test_create_overwrites_client_id() {
    let (table, handler) = setup();
    let mut body = psalm();
    body["prayerID"] = json!("client-picked");

    let created = create_ok(&handler, &body).await;

    assert_ne!(id_of(&created), "client-picked");
    assert!(table.get("client-picked").await.unwrap().is_none());
}

/// Attributes outside the schema are stored and echoed back.
#[tokio::test]
async fn test_create_keeps_extra_attributes() {
    let (table, handler) = setup();
    let mut body = psalm();
    body["notes"] = json!("keep me");

    let created = create_ok(&handler, &body).await;
    assert_eq!(created["notes"], "keep me");

    let id = id_of(&created);
    let response = handler.get(&ApiRequest::for_id(&id)).await.unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.json_body().unwrap()["notes"], "keep me");

    let stored = table.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.extra.get("notes"), Some(&json!("keep me")));
}

/// Two creates never share an id.
#[tokio::test]
async fn test_create_generates_fresh_ids() {
    let (_, handler) = setup();

    let a = create_ok(&handler, &psalm()).await;
    let b = create_ok(&handler, &psalm()).await;

    assert_ne!(id_of(&a), id_of(&b));
}

/// Missing name is one violation and nothing is written.
#[tokio::test]
async fn test_create_missing_name() {
    let (table, handler) = setup();
    let mut body = psalm();
    body.as_object_mut().unwrap().remove("name");

    let response = handler
        .create(&ApiRequest::new().with_body(body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json_body().unwrap(),
        json!({"errors": ["name is a required field"]})
    );
    assert!(table.is_empty().await);
}

/// Every missing or mistyped field is reported.
#[tokio::test]
async fn test_create_reports_all_violations() {
    let (table, handler) = setup();
    let body = json!({"verse": 3, "read": "no"});

    let response = handler
        .create(&ApiRequest::new().with_body(body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status_code, 400);
    let errors = response.json_body().unwrap()["errors"].clone();
    assert_eq!(
        errors,
        json!([
            "name is a required field",
            "verse must be a `string` type",
            "passage is a required field",
            "percentageComplete is a required field",
            "read must be a `boolean` type"
        ])
    );
    assert!(table.is_empty().await);
}

/// Unparseable body is a 400 quoting the parser message.
#[tokio::test]
async fn test_create_malformed_body() {
    let (table, handler) = setup();

    let response = handler
        .create(&ApiRequest::new().with_body("not-json"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 400);
    let message = response.json_body().unwrap()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("invalid request body format: \""));
    assert!(message.ends_with('"'));
    assert!(table.is_empty().await);
}

/// No body at all parses as malformed.
#[tokio::test]
async fn test_create_without_body() {
    let (_, handler) = setup();

    let response = handler.create(&ApiRequest::new()).await.unwrap();
    assert_eq!(response.status_code, 400);
}

// =============================================================================
// Read / Update / Delete
// =============================================================================

/// create then read yields an equal record.
#[tokio::test]
async fn test_round_trip() {
    let (_, handler) = setup();
    let created = create_ok(&handler, &psalm()).await;

    let response = handler
        .get(&ApiRequest::for_id(id_of(&created)))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.json_body().unwrap(), created);
}

/// Unknown ids are 404 for every id-addressed operation.
#[tokio::test]
async fn test_unknown_id_is_not_found_everywhere() {
    let (_, handler) = setup();
    let expected = json!({ "error": NOT_FOUND_MESSAGE });

    let get = handler.get(&ApiRequest::for_id("missing")).await.unwrap();
    let update = handler
        .update(&ApiRequest::for_id("missing").with_body(psalm().to_string()))
        .await
        .unwrap();
    let delete = handler.delete(&ApiRequest::for_id("missing")).await.unwrap();

    for response in [get, update, delete] {
        assert_eq!(response.status_code, 404);
        assert_eq!(response.json_body().unwrap(), expected);
    }
}

/// Update replaces the record and keeps the path id.
#[tokio::test]
async fn test_update_replaces_record() {
    let (table, handler) = setup();
    let id = id_of(&create_ok(&handler, &psalm()).await);

    let replacement = json!({
        "prayerID": "somebody-else",
        "name": "Ps 23",
        "verse": "v1",
        "passage": "The Lord is my shepherd",
        "percentageComplete": 100,
        "read": true
    });
    let response = handler
        .update(&ApiRequest::for_id(&id).with_body(replacement.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    let stored = table.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.prayer_id, id);
    assert!(stored.read);
    assert_eq!(stored.percentage_complete, serde_json::Number::from(100));
    assert!(stored.extra.is_empty());
    assert_eq!(table.len().await, 1);
}

/// Update replaces undeclared attributes too rather than merging them.
#[tokio::test]
async fn test_update_replaces_extra_attributes() {
    let (table, handler) = setup();
    let mut original = psalm();
    original["notes"] = json!("old");
    let id = id_of(&create_ok(&handler, &original).await);

    let mut replacement = psalm();
    replacement["tags"] = json!(["morning"]);
    let response = handler
        .update(&ApiRequest::for_id(&id).with_body(replacement.to_string()))
        .await
        .unwrap();

    let updated = response.json_body().unwrap();
    assert_eq!(updated["tags"], json!(["morning"]));
    assert!(updated.get("notes").is_none());

    let stored = table.get(&id).await.unwrap().unwrap();
    assert!(stored.extra.get("notes").is_none());
}

/// Update validates like create and leaves the record untouched on failure.
#[tokio::test]
async fn test_update_invalid_body() {
    let (table, handler) = setup();
    let id = id_of(&create_ok(&handler, &psalm()).await);

    let response = handler
        .update(&ApiRequest::for_id(&id).with_body(r#"{"name": "only"}"#))
        .await
        .unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(response.json_body().unwrap()["errors"].as_array().unwrap().len(), 4);
    assert_eq!(table.get(&id).await.unwrap().unwrap().name, "Ps 23");
}

/// Second delete of the same id is a 404.
#[tokio::test]
async fn test_delete_twice() {
    let (table, handler) = setup();
    let id = id_of(&create_ok(&handler, &psalm()).await);

    let first = handler.delete(&ApiRequest::for_id(&id)).await.unwrap();
    assert_eq!(first.status_code, 204);
    assert!(first.body.is_empty());
    assert!(first.header("content-type").is_none());

    let second = handler.delete(&ApiRequest::for_id(&id)).await.unwrap();
    assert_eq!(second.status_code, 404);
    assert!(table.is_empty().await);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_empty_table() {
    let (_, handler) = setup();

    let response = handler.list(&ApiRequest::new()).await.unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_list_returns_all_records() {
    let (_, handler) = setup();
    let a = create_ok(&handler, &psalm()).await;
    let b = create_ok(&handler, &psalm()).await;

    let listed = handler
        .list(&ApiRequest::new())
        .await
        .unwrap()
        .json_body()
        .unwrap();
    let mut ids: Vec<String> = listed.as_array().unwrap().iter().map(id_of).collect();
    ids.sort();

    let mut expected = vec![id_of(&a), id_of(&b)];
    expected.sort();
    assert_eq!(ids, expected);
}

// =============================================================================
// Unhandled faults
// =============================================================================

#[tokio::test]
async fn test_store_failures_propagate() {
    let handler = PrayerHandler::new(Arc::new(UnavailableTable));

    let create = handler
        .create(&ApiRequest::new().with_body(psalm().to_string()))
        .await;
    assert!(matches!(create, Err(UnhandledError::Store(_))));

    let get = handler.get(&ApiRequest::for_id("x")).await;
    assert!(matches!(get, Err(UnhandledError::Store(_))));

    let list = handler.list(&ApiRequest::new()).await;
    assert!(matches!(list, Err(UnhandledError::Store(_))));
}

/// Validation still runs before the store is touched.
#[tokio::test]
async fn test_validation_precedes_store() {
    let handler = PrayerHandler::new(Arc::new(UnavailableTable));

    let response = handler
        .create(&ApiRequest::new().with_body("{}"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 400);
}
