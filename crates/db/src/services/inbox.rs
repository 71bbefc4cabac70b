use crate::models::email::NewInboxEmail;
use crate::services::error::ServiceError;
use serde_json::Value;
use sqlx::PgConnection;
use tracing::debug;

/// Persists one inbound email and returns the stored row, including the
/// server-assigned id and any column defaults.
///
/// Rows come back as `to_jsonb(email_inbox)` so the caller sees exactly the
/// columns the externally-owned table has, without a typed row struct.
pub async fn insert_email(
    conn: &mut PgConnection,
    email: &NewInboxEmail,
) -> Result<Value, ServiceError> {
    let raw_payload = email.raw_payload.as_ref().map(|doc| doc.to_string());

    let row = sqlx::query_scalar::<_, Value>(
        r#"
        INSERT INTO email_inbox (
            message_id,
            internet_message_id,
            from_name,
            from_email,
            to_email,
            subject,
            body_preview,
            body_html,
            received_at,
            channel,
            processing_status,
            linked_case_id,
            raw_payload
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING to_jsonb(email_inbox)
        "#,
    )
    .bind(&email.message_id)
    .bind(&email.internet_message_id)
    .bind(&email.from_name)
    .bind(&email.from_email)
    .bind(&email.to_email)
    .bind(&email.subject)
    .bind(&email.body_preview)
    .bind(&email.body_html)
    .bind(email.received_at)
    .bind(&email.channel)
    .bind(&email.processing_status)
    .bind(email.linked_case_id)
    .bind(raw_payload)
    .fetch_one(conn)
    .await?;

    debug!(from = %email.from_email, to = %email.to_email, "stored inbox email");
    Ok(row)
}

/// Lists stored emails, most recently received first.
pub async fn list_emails(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<Value>, ServiceError> {
    let rows = sqlx::query_scalar::<_, Value>(
        r#"
        SELECT to_jsonb(email_inbox)
        FROM email_inbox
        ORDER BY received_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

/// Fetches one email by its id; absence is a distinct `EmailNotFound`.
pub async fn get_email_by_id(
    conn: &mut PgConnection,
    email_id: i64,
) -> Result<Value, ServiceError> {
    sqlx::query_scalar::<_, Value>(
        r#"
        SELECT to_jsonb(email_inbox)
        FROM email_inbox
        WHERE email_id = $1
        "#,
    )
    .bind(email_id)
    .fetch_optional(conn)
    .await?
    .ok_or(ServiceError::EmailNotFound)
}
