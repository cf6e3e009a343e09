//! Outbound request accumulation and dispatch
//!
//! A request is built up from a URL, query and header parameters, and one body
//! mode, then sent through a shared [`ApiClient`]. One linear build -> send ->
//! receive sequence per call; the only suspension point is the network call.

use crate::body::{EncodedBody, MultipartField, RequestBody};
use crate::client::ApiClient;
use crate::error::TransportResult;
use crate::response::{HttpResponse, ResponseOption};
use crate::url_builder;
use reqwest::Method;
use std::collections::HashMap;
use std::path::PathBuf;

/// Accumulator for one outbound HTTP request
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    url: String,
    query_params: HashMap<String, String>,
    headers: Vec<(String, String)>,
    body: RequestBody,
}

impl HttpRequest {
    /// Create a request targeting the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create a request by joining a base URL with an endpoint path.
    ///
    /// An absolute path replaces the base path; a relative path appends to it.
    pub fn for_endpoint(base_url: &str, path: &str) -> TransportResult<Self> {
        Ok(Self {
            url: url_builder::join(base_url, path)?,
            ..Default::default()
        })
    }

    /// Add a query parameter. Values are percent-encoded at send time, not here.
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    /// Add a header. Stored verbatim and sent as-is.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a form field, switching the body mode to form encoding if another
    /// mode is currently active.
    pub fn body_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let field = (name.into(), value.into());
        match &mut self.body {
            RequestBody::Form(fields) => fields.push(field),
            _ => self.body = RequestBody::Form(vec![field]),
        }
        self
    }

    /// Add a scalar multipart field, switching to multipart mode if needed
    pub fn multipart_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_multipart(MultipartField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a multipart file part referencing a path on disk
    pub fn multipart_file(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.push_multipart(MultipartField::FilePath {
            name: name.into(),
            path: path.into(),
        });
        self
    }

    /// Add a multipart file part from in-memory bytes
    pub fn multipart_bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.push_multipart(MultipartField::FileBytes {
            name: name.into(),
            filename: filename.into(),
            bytes,
        });
        self
    }

    /// Use a single file streamed from disk as the body
    pub fn file(mut self, path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        self.body = RequestBody::File {
            path: path.into(),
            content_type: content_type.into(),
        };
        self
    }

    /// Use a raw string as the body
    pub fn text(mut self, content: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.body = RequestBody::Text {
            content: content.into(),
            content_type: content_type.into(),
        };
        self
    }

    /// Use a raw byte array as the body
    pub fn binary(mut self, bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        self.body = RequestBody::Binary {
            bytes,
            content_type: content_type.into(),
        };
        self
    }

    /// The currently active body mode
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    fn push_multipart(&mut self, field: MultipartField) {
        match &mut self.body {
            RequestBody::Multipart(fields) => fields.push(field),
            _ => self.body = RequestBody::Multipart(vec![field]),
        }
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Build and dispatch the request, materializing the response per `option`.
    ///
    /// Supported methods: GET, POST, PUT, DELETE. DELETE may carry a body or
    /// not. Transport failures surface as typed errors rather than a partial
    /// response.
    pub async fn send(
        &self,
        client: &ApiClient,
        method: Method,
        option: ResponseOption,
    ) -> TransportResult<HttpResponse> {
        let url = url_builder::with_query(&self.url, &self.query_params)?;
        tracing::debug!(%method, url = %url, "dispatching request");

        let mut builder = client.inner().request(method, url);

        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        match self.body.encode().await? {
            EncodedBody::None => {}
            EncodedBody::Body { body, content_type } => {
                // Honor an explicit content-type header over the mode's default
                if !self.has_header("content-type") {
                    builder = builder.header("content-type", &content_type);
                }
                builder = builder.body(body);
            }
            EncodedBody::Multipart(form) => {
                // reqwest sets the multipart content type and boundary itself
                builder = builder.multipart(form);
            }
        }

        let response = builder.send().await?;
        HttpResponse::read(response, option).await
    }
}
