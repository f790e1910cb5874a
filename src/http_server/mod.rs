//! HTTP surface for the person record API
//!
//! Routing, request parsing and error-to-response mapping. All request and
//! response bodies are JSON.

mod config;
mod errors;
mod response;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::MessageResponse;
pub use routes::{person_routes, AppState, IdQuery};
pub use server::HttpServer;
