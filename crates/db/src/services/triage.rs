//! Read-only views over the triage tables. The rows are owned entirely by
//! the database; this crate never constructs or validates them.

use crate::services::error::ServiceError;
use serde_json::Value;
use sqlx::PgConnection;

pub async fn list_cases(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<Value>, ServiceError> {
    let rows = sqlx::query_scalar::<_, Value>(
        r#"
        SELECT to_jsonb(cases)
        FROM cases
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

pub async fn list_ai_decisions(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<Value>, ServiceError> {
    let rows = sqlx::query_scalar::<_, Value>(
        r#"
        SELECT to_jsonb(ai_decisions)
        FROM ai_decisions
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

pub async fn list_risk_events(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<Value>, ServiceError> {
    let rows = sqlx::query_scalar::<_, Value>(
        r#"
        SELECT to_jsonb(risk_events)
        FROM risk_events
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}
