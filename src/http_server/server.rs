//! HTTP server
//!
//! Owns the listener configuration and the built router. The transport is
//! axum on tokio; mutation atomicity lives below in the record service, so
//! the server itself is a plain multi-threaded listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::routes::{person_routes, AppState};

/// HTTP server for the person record API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a server from config and shared state
    pub fn new(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(state);
        Self { config, router }
    }

    fn build_router(state: Arc<AppState>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        person_routes(state).layer(cors)
    }

    /// Socket address the server will bind to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listener and serves until the process terminates
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("server_started", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await
    }
}
