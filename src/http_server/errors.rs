//! HTTP API errors
//!
//! Every failure is recovered at this boundary and mapped to a JSON
//! `{"message": ...}` body with the matching status code. Nothing here
//! terminates the process; a failed durable write surfaces as a 500 for the
//! request that triggered it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::service::ServiceError;

use super::response::MessageResponse;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Candidate record failed validation; message is the validator's
    #[error("{0}")]
    Validation(String),

    /// Required `id` query parameter omitted
    #[error("ID is required")]
    MissingId,

    /// Identifier not present in the collection
    #[error("You should enter a valid ID")]
    NotFound,

    /// Body is not parseable JSON; message varies by endpoint
    #[error("{0}")]
    MalformedBody(String),

    /// Path recognized, method not
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Path unrecognized
    #[error("Not Found")]
    RouteNotFound,

    /// Durable write or shared-state failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingId => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(field) => ApiError::Validation(field.to_string()),
            ServiceError::MissingId => ApiError::MissingId,
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Persistence(e) => ApiError::Internal(e.to_string()),
            ServiceError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
