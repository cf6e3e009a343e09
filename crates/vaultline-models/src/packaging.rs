//! Configuration package models

use crate::response::{Envelope, ResponseStatus};
use serde::{Deserialize, Serialize};

/// One step inside a deployed package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageStep {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub deployment_status: Option<ResponseStatus>,
    pub deployment_message: Option<String>,
}

/// Result of importing or deploying a package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDeploymentResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub package_id: Option<String>,
    pub package_status: Option<String>,
    #[serde(default)]
    pub package_steps: Vec<PackageStep>,
}

impl PackageDeploymentResponse {
    /// True iff at least one step did not deploy successfully, or the
    /// top-level error list is non-empty.
    pub fn has_failures(&self) -> bool {
        if !self.envelope.errors.is_empty() {
            return true;
        }
        self.package_steps.iter().any(|step| {
            step.deployment_status
                .map_or(true, |status| !status.is_success())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_deployment() {
        let response: PackageDeploymentResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "package_id": "PKG-0042",
            "package_status": "Deployed",
            "package_steps": [
                {"name": "step_1", "type": "Component", "deployment_status": "SUCCESS"},
                {"name": "step_2", "type": "Component", "deployment_status": "SUCCESS"}
            ]
        }))
        .unwrap();

        assert!(!response.has_failures());
    }

    #[test]
    fn test_failed_step_taints_deployment() {
        let response: PackageDeploymentResponse = serde_json::from_value(json!({
            "responseStatus": "SUCCESS",
            "package_id": "PKG-0042",
            "package_steps": [
                {"name": "step_1", "deployment_status": "SUCCESS"},
                {"name": "step_2", "deployment_status": "FAILURE",
                 "deployment_message": "Component already exists"}
            ]
        }))
        .unwrap();

        assert!(response.has_failures());
    }
}
