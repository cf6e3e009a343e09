//! HTTP client construction
//!
//! One pooled client per `ApiClient`, constructed explicitly at application start
//! and passed by reference to every call. Connection pooling and the process-wide
//! timeout are the only cross-cutting policies; there is no retry, backoff, or
//! per-request timeout override.

use crate::error::{TransportError, TransportResult};
use reqwest::Client;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Total timeout across connect/read/write for a single call
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60 * 60),
            connect_timeout: Duration::from_secs(10),
            user_agent: "Vaultline/0.1".to_string(),
        }
    }
}

/// Shared HTTP client for all API calls
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client with the given configuration
    pub fn new(config: ClientConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                TransportError::InvalidConfig(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::debug!(
            timeout_secs = config.timeout.as_secs(),
            connect_timeout_secs = config.connect_timeout.as_secs(),
            "HTTP client created"
        );

        Ok(Self { client, config })
    }

    /// Get the inner reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default()).expect("Failed to create default HTTP client")
    }
}
