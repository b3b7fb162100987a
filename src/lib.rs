//! prayers - CRUD service for tracking prayers
//!
//! Five handlers (create, read, update, delete, list) over a single
//! key-value table keyed by `prayerID`. Each one validates its input,
//! performs one table operation, and maps faults to HTTP responses.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod store;

pub use model::{Prayer, PrayerDraft, PrayerId};
pub use rest_api::{ApiRequest, ApiResponse, PrayerHandler, RestError, UnhandledError};
pub use schema::{SchemaValidator, ValidationError};
pub use store::{FileTable, MemoryTable, PrayerStore, StoreConfig, StoreError};
