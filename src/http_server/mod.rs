//! # HTTP Server Module
//!
//! Serves the prayers API over HTTP.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /prayers`, `POST /prayers` - List, create
//! - `GET|PUT|DELETE /prayers/:id` - Read, replace, delete

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
