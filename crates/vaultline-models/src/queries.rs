//! Query endpoint models
//!
//! Query rows are schemaless: their columns depend entirely on the submitted
//! query, so each row stays a raw JSON value for the caller to project.

use crate::response::{Envelope, ResponseDetails};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<ResponseDetails>,
    #[serde(default)]
    pub data: Vec<JsonValue>,
}

impl QueryResponse {
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

    pub fn is_paginated(&self) -> bool {
        self.response_details
            .as_ref()
            .is_some_and(|details| details.is_paginated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_query() {
        let response: QueryResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "responseDetails": {
                "total": 500, "limit": 100, "offset": 100, "size": 100,
                "next_page": "/api/query?offset=200",
                "previous_page": "/api/query?offset=0"
            },
            "data": [
                {"id": 101, "name": "Annual Report"},
                {"id": 102, "name": "Protocol"}
            ]
        }))
        .unwrap();

        assert!(response.is_paginated());
        assert!(response.has_next_page());
        assert!(response.has_previous_page());
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0]["name"], "Annual Report");
    }

    #[test]
    fn test_single_page_query() {
        let response: QueryResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "responseDetails": {"total": 2, "limit": 100, "offset": 0, "size": 2},
            "data": [{"id": 101}, {"id": 102}]
        }))
        .unwrap();

        assert!(!response.is_paginated());
        assert!(!response.has_next_page());
    }
}
