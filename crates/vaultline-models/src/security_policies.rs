//! Security policy models

use crate::response::Envelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityPolicy {
    pub name: Option<String>,
    pub label: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRequirements {
    pub min_password_length: Option<u32>,
    pub requires_number: Option<bool>,
    pub requires_uppercase_letter: Option<bool>,
    pub requires_non_alphanumeric: Option<bool>,
    pub password_expiration_days: Option<u32>,
    pub password_history_reuse: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityPolicyResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub policy_details: Option<SecurityPolicy>,
    pub password_requirements: Option<PasswordRequirements>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityPoliciesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub security_policies: Vec<SecurityPolicy>,
}
