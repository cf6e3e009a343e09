//! Document domain models

use crate::response::{ApiError, Envelope, ResponseDetails, ResponseStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub lifecycle: Option<String>,
    pub status: Option<String>,
    pub major_version_number: Option<i32>,
    pub minor_version_number: Option<i32>,
    pub document_number: Option<String>,
    pub filename: Option<String>,
    pub size: Option<u64>,
    pub md5checksum: Option<String>,
    pub created_by: Option<i64>,
}

/// A single document retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub document: Option<Document>,
}

/// A paginated document listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<ResponseDetails>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl DocumentsResponse {
    pub fn has_next_page(&self) -> bool {
        self.response_details
            .as_ref()
            .is_some_and(|details| details.has_next_page())
    }

    pub fn has_previous_page(&self) -> bool {
        self.response_details
            .as_ref()
            .is_some_and(|details| details.has_previous_page())
    }
}

/// Outcome of one document in a bulk operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    #[serde(rename = "responseStatus", default)]
    pub response_status: Option<ResponseStatus>,
    pub id: Option<i64>,
    pub external_id: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// Result of a bulk create/update/delete across documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentBulkResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<DocumentResult>,
}

impl DocumentBulkResponse {
    /// Any failure taints the whole: true iff at least one entry's status is
    /// not SUCCESS, or the top-level error list is non-empty.
    pub fn has_failures(&self) -> bool {
        if !self.envelope.errors.is_empty() {
            return true;
        }
        self.data.iter().any(|entry| {
            entry
                .response_status
                .map_or(true, |status| !status.is_success())
        })
    }
}
