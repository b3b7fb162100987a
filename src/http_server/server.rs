//! # HTTP Server
//!
//! Puts the prayers routes and the health check behind one listener, with
//! CORS and request tracing layered on top.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::Event;
use crate::rest_api::{prayer_routes, PrayerHandler};

use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// HTTP server for the prayers API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that dispatches prayer requests to `handler`
    pub fn new(config: HttpServerConfig, handler: PrayerHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, handler: PrayerHandler) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(prayer_routes(handler))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(event = %Event::Serving, addr = %addr, "prayers API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!(event = %Event::ShutdownComplete, "server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!(event = %Event::ShutdownStart, "shutdown signal received");
}
