//! URL building for outbound requests

use crate::error::{TransportError, TransportResult};
use std::collections::HashMap;
use url::Url;

/// Join a base URL with an endpoint path, handling slashes and encoding.
///
/// An absolute path replaces the base path entirely; a relative path appends to
/// it. Reserved characters in the path are percent-encoded.
pub fn join(base_url: &str, path: &str) -> TransportResult<String> {
    let mut base = Url::parse(base_url)?;

    if path.is_empty() {
        return Ok(base.to_string());
    }

    let result = if path.starts_with('/') {
        base.join(path)
    } else {
        // Relative joins need the base path to end with '/'
        let base_path = base.path();
        if !base_path.ends_with('/') {
            base.set_path(&format!("{}/", base_path));
        }
        base.join(path)
    }
    .map_err(|e| {
        TransportError::InvalidConfig(format!(
            "Failed to join URL '{}' with path '{}': {}",
            base_url, path, e
        ))
    })?;

    Ok(result.to_string())
}

/// Apply query parameters to a URL, percent-encoding keys and values.
///
/// Parameters already present on the URL are preserved; the map's entries are
/// appended in whatever order the map yields them. Query construction happens
/// here, at send time, not when parameters are collected.
pub fn with_query(url: &str, query_params: &HashMap<String, String>) -> TransportResult<Url> {
    let mut url = Url::parse(url)?;

    if !query_params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query_params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
