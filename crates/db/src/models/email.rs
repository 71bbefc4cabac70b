use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

fn default_channel() -> Option<String> {
    Some("email".to_string())
}

fn default_processing_status() -> Option<String> {
    Some("new".to_string())
}

/// Inbound email as posted by upstream ingestion.
///
/// Only the two address fields are validated in-process; everything else is
/// handed to the database as-is and constrained by the external schema.
#[derive(Debug, Deserialize)]
pub struct NewInboxEmail {
    pub message_id: Option<String>,
    pub internet_message_id: Option<String>,

    pub from_name: Option<String>,
    pub from_email: String,
    pub to_email: String,

    pub subject: Option<String>,
    pub body_preview: Option<String>,
    pub body_html: Option<String>,

    pub received_at: Option<DateTime<Utc>>,

    // Defaults apply only when the field is absent; an explicit null is
    // stored as NULL.
    #[serde(default = "default_channel")]
    pub channel: Option<String>,
    #[serde(default = "default_processing_status")]
    pub processing_status: Option<String>,

    pub linked_case_id: Option<i64>,

    pub raw_payload: Option<Value>,
}
