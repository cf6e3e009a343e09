//! Audit trail models

use crate::response::{Envelope, ResponseDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub user_name: Option<String>,
    pub full_name: Option<String>,
    pub action: Option<String>,
    pub item: Option<String>,
    pub field_name: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTrailResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<ResponseDetails>,
    #[serde(default)]
    pub data: Vec<AuditEvent>,
}

impl AuditTrailResponse {
    pub fn has_next_page(&self) -> bool {
        self.response_details
            .as_ref()
            .is_some_and(|details| details.has_next_page())
    }
}
