use crate::core::{ApiError, AppState};
use axum::{extract::State, Json};
use db::services::error::ServiceError;
use serde_json::{json, Value};

/// Proves that both the service and the database are reachable.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.db.ping().await.map_err(ServiceError::from)?;
    Ok(Json(json!({ "status": "ok", "db": "connected" })))
}
