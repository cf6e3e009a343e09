//! Response materialization and header access
//!
//! A completed exchange is normalized into exactly one of three body shapes,
//! chosen before the call is made: an in-memory string, an in-memory byte
//! array, or a file streamed to a caller-supplied path. Status, status text,
//! and all headers are read unconditionally.

use crate::error::TransportResult;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Well-known header names, lowercase as normalized by the HTTP layer
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
    pub const CONTENT_DISPOSITION: &str = "content-disposition";

    pub const BURST_LIMIT: &str = "x-vault-burst-limit";
    pub const BURST_LIMIT_REMAINING: &str = "x-vault-burst-limit-remaining";
    pub const EXECUTION_ID: &str = "x-vault-execution-id";
    pub const RESPONSE_DELAY: &str = "x-vault-response-delay";
    pub const TRUNCATED_SESSION_ID: &str = "x-vault-truncated-session-id";
    pub const VAULT_ID: &str = "x-vault-id";
    pub const USER_ID: &str = "x-vault-user-id";

    pub const SDK_COUNT: &str = "x-vault-sdk-count";
    pub const SDK_CPU_TIME: &str = "x-vault-sdk-cpu-time";
    pub const SDK_ELAPSED_TIME: &str = "x-vault-sdk-elapsed-time";
    pub const SDK_GROSS_MEMORY: &str = "x-vault-sdk-gross-memory";
}

/// Caller-selected shape for materializing the response body.
///
/// Fixed before the call is made, not after inspecting the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOption {
    /// Read the entire body into a string
    Text,
    /// Read the entire body into a byte array
    Bytes,
    /// Stream the body to the given path in chunks
    ToFile(PathBuf),
}

/// Exactly one realized body form per response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Text(String),
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// A completed HTTP exchange
///
/// Created fresh per call, populated synchronously during the call, never
/// mutated afterward. Header names are lowercase; multi-valued headers keep
/// all values in arrival order.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub headers: HashMap<String, Vec<String>>,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub(crate) async fn read(
        response: reqwest::Response,
        option: ResponseOption,
    ) -> TransportResult<Self> {
        let status = response.status();
        let status_code = status.as_u16();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }

        let content_type = headers
            .get(headers::CONTENT_TYPE)
            .and_then(|values| values.first())
            .cloned();

        let body = match option {
            ResponseOption::Text => ResponseBody::Text(response.text().await?),
            ResponseOption::Bytes => ResponseBody::Bytes(response.bytes().await?.to_vec()),
            ResponseOption::ToFile(path) => {
                let mut file = tokio::fs::File::create(&path).await?;
                let mut stream = response.bytes_stream();
                let mut written: u64 = 0;
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk?;
                    file.write_all(&chunk).await?;
                    written += chunk.len() as u64;
                }
                file.flush().await?;
                tracing::debug!(path = %path.display(), bytes = written, "response body written to file");
                ResponseBody::File(path)
            }
        };

        Ok(Self {
            status_code,
            status_text,
            content_type,
            headers,
            body,
        })
    }

    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// First value of a header, or `None` for unknown names
    pub fn header_first(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a header in arrival order, or `None` for unknown names
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name).map(Vec::as_slice)
    }

    /// The body as a string, if the response was materialized as text
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The body as bytes, if the response was materialized as a byte array
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.body {
            ResponseBody::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The path the body was written to, if the response was streamed to a file
    pub fn file_path(&self) -> Option<&Path> {
        match &self.body {
            ResponseBody::File(path) => Some(path),
            _ => None,
        }
    }

    /// Deserialize an in-memory body as JSON into a typed model
    pub fn json<T: DeserializeOwned>(&self) -> TransportResult<T> {
        match &self.body {
            ResponseBody::Text(text) => Ok(serde_json::from_str(text)?),
            ResponseBody::Bytes(bytes) => Ok(serde_json::from_slice(bytes)?),
            ResponseBody::File(path) => Err(crate::error::TransportError::Body(format!(
                "Response body was streamed to {}; read the file instead",
                path.display()
            ))),
        }
    }

    pub fn content_disposition(&self) -> Option<&str> {
        self.header_first(headers::CONTENT_DISPOSITION)
    }

    pub fn burst_limit(&self) -> Option<&str> {
        self.header_first(headers::BURST_LIMIT)
    }

    pub fn burst_limit_remaining(&self) -> Option<&str> {
        self.header_first(headers::BURST_LIMIT_REMAINING)
    }

    pub fn execution_id(&self) -> Option<&str> {
        self.header_first(headers::EXECUTION_ID)
    }

    pub fn response_delay(&self) -> Option<&str> {
        self.header_first(headers::RESPONSE_DELAY)
    }

    pub fn truncated_session_id(&self) -> Option<&str> {
        self.header_first(headers::TRUNCATED_SESSION_ID)
    }

    pub fn vault_id(&self) -> Option<&str> {
        self.header_first(headers::VAULT_ID)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.header_first(headers::USER_ID)
    }

    pub fn sdk_count(&self) -> Option<&str> {
        self.header_first(headers::SDK_COUNT)
    }

    pub fn sdk_cpu_time(&self) -> Option<&str> {
        self.header_first(headers::SDK_CPU_TIME)
    }

    pub fn sdk_elapsed_time(&self) -> Option<&str> {
        self.header_first(headers::SDK_ELAPSED_TIME)
    }

    pub fn sdk_gross_memory(&self) -> Option<&str> {
        self.header_first(headers::SDK_GROSS_MEMORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_headers(headers: HashMap<String, Vec<String>>) -> HttpResponse {
        HttpResponse {
            status_code: 200,
            status_text: "OK".to_string(),
            content_type: None,
            headers,
            body: ResponseBody::Text(String::new()),
        }
    }

    #[test]
    fn test_header_lookup_unknown_name_is_none() {
        let response = response_with_headers(HashMap::new());
        assert_eq!(response.header_first("x-vault-execution-id"), None);
        assert_eq!(response.header_values("anything"), None);
        assert_eq!(response.vault_id(), None);
    }

    #[test]
    fn test_header_multi_value_order() {
        let mut headers = HashMap::new();
        headers.insert(
            "set-cookie".to_string(),
            vec!["a=1".to_string(), "b=2".to_string()],
        );
        let response = response_with_headers(headers);

        assert_eq!(response.header_first("set-cookie"), Some("a=1"));
        assert_eq!(
            response.header_values("set-cookie").unwrap(),
            &["a=1".to_string(), "b=2".to_string()]
        );
    }

    #[test]
    fn test_telemetry_accessors() {
        let mut headers = HashMap::new();
        headers.insert(headers::BURST_LIMIT.to_string(), vec!["2000".to_string()]);
        headers.insert(
            headers::BURST_LIMIT_REMAINING.to_string(),
            vec!["1999".to_string()],
        );
        headers.insert(headers::VAULT_ID.to_string(), vec!["4321".to_string()]);
        let response = response_with_headers(headers);

        assert_eq!(response.burst_limit(), Some("2000"));
        assert_eq!(response.burst_limit_remaining(), Some("1999"));
        assert_eq!(response.vault_id(), Some("4321"));
        assert_eq!(response.user_id(), None);
    }

    #[test]
    fn test_body_accessors_are_exclusive() {
        let text = HttpResponse {
            status_code: 200,
            status_text: "OK".to_string(),
            content_type: Some("application/json".to_string()),
            headers: HashMap::new(),
            body: ResponseBody::Text("{}".to_string()),
        };
        assert_eq!(text.text(), Some("{}"));
        assert_eq!(text.bytes(), None);
        assert_eq!(text.file_path(), None);

        let bytes = HttpResponse {
            body: ResponseBody::Bytes(vec![1, 2, 3]),
            ..text.clone()
        };
        assert_eq!(bytes.text(), None);
        assert_eq!(bytes.bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(bytes.file_path(), None);

        let file = HttpResponse {
            body: ResponseBody::File(PathBuf::from("/tmp/out.bin")),
            ..text
        };
        assert_eq!(file.text(), None);
        assert_eq!(file.bytes(), None);
        assert_eq!(file.file_path(), Some(Path::new("/tmp/out.bin")));
    }

    #[test]
    fn test_json_rejects_file_body() {
        let response = HttpResponse {
            status_code: 200,
            status_text: "OK".to_string(),
            content_type: None,
            headers: HashMap::new(),
            body: ResponseBody::File(PathBuf::from("/tmp/out.bin")),
        };
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
