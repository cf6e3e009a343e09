//! Object metadata (describe) and record operation models

use crate::response::{ApiError, Envelope, ResponseStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub editable: Option<bool>,
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: Option<String>,
    pub label: Option<String>,
    pub label_plural: Option<String>,
    pub in_menu: Option<bool>,
    #[serde(default)]
    pub fields: Vec<ObjectField>,
}

/// Describe result for a single object type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectMetadataResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub object: Option<ObjectType>,
}

/// Listing of all object types in the vault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectTypesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub objects: Vec<ObjectType>,
}

/// Outcome of one record in a bulk object operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecordResult {
    #[serde(rename = "responseStatus", default)]
    pub response_status: Option<ResponseStatus>,
    pub id: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// Result of a bulk create/update/delete across object records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecordBulkResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<ObjectRecordResult>,
}

impl ObjectRecordBulkResponse {
    /// Any failure taints the whole: true iff at least one record's status is
    /// not SUCCESS, or the top-level error list is non-empty.
    pub fn has_failures(&self) -> bool {
        if !self.envelope.errors.is_empty() {
            return true;
        }
        self.data.iter().any(|record| {
            record
                .response_status
                .map_or(true, |status| !status.is_success())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_describe() {
        let response: ObjectMetadataResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "object": {
                "name": "product",
                "label": "Product",
                "label_plural": "Products",
                "fields": [
                    {"name": "name", "type": "String", "required": true, "max_length": 128},
                    {"name": "generic_name", "type": "String"}
                ]
            }
        }))
        .unwrap();

        let object = response.object.unwrap();
        assert_eq!(object.fields.len(), 2);
        assert_eq!(object.fields[0].required, Some(true));
        assert_eq!(object.fields[1].required, None);
    }

    #[test]
    fn test_record_bulk_all_success_has_no_failures() {
        let response: ObjectRecordBulkResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "data": [
                {"responseStatus": "SUCCESS", "id": "V0P000000001001"},
                {"responseStatus": "SUCCESS", "id": "V0P000000001002"}
            ]
        }))
        .unwrap();

        assert!(!response.has_failures());
    }

    #[test]
    fn test_record_bulk_child_failure_taints_the_whole() {
        let response: ObjectRecordBulkResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "data": [
                {"responseStatus": "SUCCESS", "id": "V0P000000001001"},
                {"responseStatus": "FAILURE", "errors": [
                    {"type": "INVALID_DATA", "message": "Duplicate record"}
                ]}
            ]
        }))
        .unwrap();

        assert!(response.has_failures());
    }

    #[test]
    fn test_record_bulk_top_level_errors_taint_the_whole() {
        let response: ObjectRecordBulkResponse = serde_json::from_value(json!({
            "responseStatus": "FAILURE",
            "errors": [{"type": "PARAMETER_REQUIRED", "message": "Missing object name"}],
            "data": []
        }))
        .unwrap();

        assert!(response.has_failures());
    }
}
