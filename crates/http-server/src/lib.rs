use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::AppState;

pub mod api;
pub mod core;

/// Assembles the full route table over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health_handler))
        .route(
            "/email-inbox",
            post(api::inbox::insert_email_handler).get(api::inbox::list_emails_handler),
        )
        .route("/email-inbox/:email_id", get(api::inbox::get_email_handler))
        .route("/cases", get(api::triage::list_cases_handler))
        .route("/ai-decisions", get(api::triage::list_ai_decisions_handler))
        .route("/risk-events", get(api::triage::list_risk_events_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
