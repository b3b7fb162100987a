//! # Prayers REST API
//!
//! Handlers for the prayer resource, the request/response envelope they
//! speak, the error mapper, and the axum routes that expose them.

pub mod errors;
pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult, UnhandledError, NOT_FOUND_MESSAGE};
pub use handler::{HandlerResult, PrayerHandler};
pub use request::{ApiRequest, ID_PARAM};
pub use response::{ApiResponse, APPLICATION_JSON};
pub use server::prayer_routes;
