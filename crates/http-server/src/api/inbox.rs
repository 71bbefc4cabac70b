use crate::api::Pagination;
use crate::core::{ApiError, AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use db::models::email::NewInboxEmail;
use db::services::error::ServiceError;
use db::services::inbox;
use serde_json::{json, Value};

/// Handles the request to ingest one inbound email.
#[axum::debug_handler]
pub async fn insert_email_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewInboxEmail>,
) -> Result<Json<Value>, ApiError> {
    // 1. Validate the two address fields before touching the database.
    validate_address("from_email", &payload.from_email)?;
    validate_address("to_email", &payload.to_email)?;

    // 2. One connection, one INSERT; the connection closes on drop whether
    // the statement succeeds or not.
    let mut conn = state
        .db
        .connect()
        .await
        .map_err(|e| ApiError::Insert(ServiceError::Database(e)))?;
    let row = inbox::insert_email(&mut conn, &payload)
        .await
        .map_err(ApiError::Insert)?;

    Ok(Json(json!({ "status": "inserted", "data": row })))
}

pub async fn list_emails_handler(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let (limit, offset) = page.clamped();
    let mut conn = state.db.connect().await.map_err(ServiceError::from)?;
    let rows = inbox::list_emails(&mut conn, limit, offset).await?;
    Ok(Json(rows))
}

pub async fn get_email_handler(
    State(state): State<AppState>,
    Path(email_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let mut conn = state.db.connect().await.map_err(ServiceError::from)?;
    let row = inbox::get_email_by_id(&mut conn, email_id).await?;
    Ok(Json(row))
}

fn validate_address(field: &str, address: &str) -> Result<(), ApiError> {
    if !is_valid_email(address) {
        return Err(ApiError::Validation(format!(
            "{} is not a valid email address",
            field
        )));
    }
    Ok(())
}

/// Syntactic check only: one `@`, a non-empty local part, and a dotted
/// domain with no empty labels.
fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = validate_address("to_email", "nope").unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref msg)
            if msg == "to_email is not a valid email address"));
    }
}
