//! Sandbox vault models

use crate::response::Envelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sandbox {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub domain: Option<String>,
    pub vault_id: Option<i64>,
    pub size: Option<String>,
    pub created_date: Option<String>,
    pub refreshed_date: Option<String>,
}

/// Sandbox allowances for the vault, by size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxEntitlement {
    pub size: Option<String>,
    pub allowed: Option<u32>,
    pub available: Option<u32>,
    pub temporary: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<Sandbox>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxEntitlementsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<SandboxEntitlement>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sandbox_listing() {
        let response: SandboxesResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "data": [
                {"id": 9, "name": "uat", "status": "Active", "domain": "uat.example.com", "vault_id": 4322}
            ]
        }))
        .unwrap();

        assert_eq!(response.data[0].vault_id, Some(4322));
    }

    #[test]
    fn test_entitlements() {
        let response: SandboxEntitlementsResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "data": [{"size": "Small", "allowed": 2, "available": 1}]
        }))
        .unwrap();

        assert_eq!(response.data[0].available, Some(1));
        assert_eq!(response.data[0].temporary, None);
    }
}
