//! Paginated reads over the triage tables. Rows are returned exactly as the
//! database shapes them.

use crate::api::Pagination;
use crate::core::{ApiError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use db::services::error::ServiceError;
use db::services::triage;
use serde_json::Value;

pub async fn list_cases_handler(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let (limit, offset) = page.clamped();
    let mut conn = state.db.connect().await.map_err(ServiceError::from)?;
    let rows = triage::list_cases(&mut conn, limit, offset).await?;
    Ok(Json(rows))
}

pub async fn list_ai_decisions_handler(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let (limit, offset) = page.clamped();
    let mut conn = state.db.connect().await.map_err(ServiceError::from)?;
    let rows = triage::list_ai_decisions(&mut conn, limit, offset).await?;
    Ok(Json(rows))
}

pub async fn list_risk_events_handler(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let (limit, offset) = page.clamped();
    let mut conn = state.db.connect().await.map_err(ServiceError::from)?;
    let rows = triage::list_risk_events(&mut conn, limit, offset).await?;
    Ok(Json(rows))
}
