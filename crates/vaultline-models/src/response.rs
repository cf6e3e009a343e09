//! Shared response envelope and pagination details
//!
//! Every API response carries a status verdict, an optional human-readable
//! message, and a list of structured errors. Paginated list responses add a
//! details block with offset/limit counters and page links.

use serde::{Deserialize, Serialize};

/// Application-level verdict reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
    #[serde(rename = "WARNING")]
    Warning,
}

impl ResponseStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::Success)
    }
}

/// A structured error entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// Fields common to every response, flattened into each typed shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "responseStatus")]
    pub response_status: ResponseStatus,
    #[serde(rename = "responseMessage", default)]
    pub response_message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl Envelope {
    pub fn is_successful(&self) -> bool {
        self.response_status.is_success()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.response_status, ResponseStatus::Failure)
    }
}

/// Pagination block on list responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseDetails {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub previous_page: Option<String>,
}

impl ResponseDetails {
    /// True iff the next-page link is present and non-empty
    pub fn has_next_page(&self) -> bool {
        self.next_page.as_deref().is_some_and(|page| !page.is_empty())
    }

    /// True iff the previous-page link is present and non-empty
    pub fn has_previous_page(&self) -> bool {
        self.previous_page
            .as_deref()
            .is_some_and(|page| !page.is_empty())
    }

    pub fn is_paginated(&self) -> bool {
        self.has_next_page() || self.has_previous_page()
    }
}
