//! Person record HTTP routes
//!
//! Fixed path set, one expected method each:
//!
//! | Path      | Method | Success                          |
//! |-----------|--------|----------------------------------|
//! | /create   | POST   | 201 `{id, ...fields}`            |
//! | /list     | GET    | 200 record or filtered array     |
//! | /update   | PUT    | 200 merged record                |
//! | /delete   | DELETE | 200 `{"message": ...}`           |
//!
//! A known path with the wrong method is 405, an unknown path 404. Bodies
//! are read in full before parsing; update checks its `id` before touching
//! the body, so an unknown id is 404 even when the body is malformed.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::query::ListQuery;
use crate::service::RecordService;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

/// Shared state for all handlers
pub struct AppState {
    pub service: RecordService,
}

impl AppState {
    pub fn new(service: RecordService) -> Self {
        Self { service }
    }
}

/// Query carrying only the record identifier
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl IdQuery {
    /// The `id` parameter, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Builds the person record router
pub fn person_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_handler).fallback(method_not_allowed))
        .route("/list", get(list_handler).fallback(method_not_allowed))
        .route("/update", put(update_handler).fallback(method_not_allowed))
        .route("/delete", delete(delete_handler).fallback(method_not_allowed))
        .fallback(route_not_found)
        .with_state(state)
}

fn parse_body(body: &[u8], message: &str) -> ApiResult<Value> {
    serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody(message.to_string()))
}

async fn create_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let payload = parse_body(&body, "Invalid JSON format")?;
    let created = state.service.create(payload)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    // A present, matching id yields the single record; otherwise the
    // request falls through to a filtered list
    if let Some(id) = query.id() {
        if let Some(record) = state.service.fetch(id)? {
            return Ok(Json(record));
        }
    }

    let results = state.service.list(&query)?;
    Ok(Json(Value::Array(results)))
}

async fn update_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let id = query.id().ok_or(ApiError::MissingId)?;
    state.service.ensure_exists(Some(id))?;

    let payload = parse_body(&body, "Invalid JSON")?;
    let merged = state.service.update(id, payload)?;
    Ok(Json(merged))
}

async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.delete(query.id())?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
