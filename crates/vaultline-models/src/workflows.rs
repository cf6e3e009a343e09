//! Workflow domain models

use crate::response::{Envelope, ResponseDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub id: Option<i64>,
    pub label: Option<String>,
    pub status: Option<String>,
    pub document_id: Option<i64>,
    pub initiator: Option<i64>,
    pub started_date: Option<String>,
    pub due_date: Option<String>,
}

/// An action currently available on a workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowAction {
    pub name: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<ResponseDetails>,
    #[serde(default)]
    pub data: Vec<Workflow>,
}

impl WorkflowsResponse {
    pub fn has_next_page(&self) -> bool {
        self.response_details
            .as_ref()
            .is_some_and(|details| details.has_next_page())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowActionsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<WorkflowAction>,
}
