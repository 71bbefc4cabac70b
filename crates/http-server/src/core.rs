use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::config::DbConfig;
use db::services::error::ServiceError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

// Define a struct to hold our application's shared state. Connection
// settings only: every request opens and drops its own connection, so there
// is no pool to share.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConfig,
}

// Define a custom error type for our API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Insert failed: {0}")]
    Insert(#[source] ServiceError),

    #[error(transparent)]
    Database(#[from] ServiceError),
}

// Implement `IntoResponse` for `ApiError` to convert it into an HTTP response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(ServiceError::EmailNotFound) => {
                (StatusCode::NOT_FOUND, "Email not found".to_string())
            }
            ApiError::Insert(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Insert failed: {err}"),
            ),
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", detail);
        }

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}
