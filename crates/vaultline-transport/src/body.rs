//! Request body modes and their wire encoding
//!
//! A request carries at most one body mode at a time. The mode is an explicit
//! sum type; selecting a new mode replaces the previous one (last write wins).

use crate::error::{TransportError, TransportResult};
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use std::path::PathBuf;
use tokio_util::io::ReaderStream;

/// One of the mutually exclusive payload encodings for an outbound request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No payload
    Empty,
    /// URL-encoded form fields, sent as `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// Multipart form mixing scalar fields, on-disk files, and in-memory files
    Multipart(Vec<MultipartField>),
    /// A single file streamed from disk with a declared media type
    File { path: PathBuf, content_type: String },
    /// A raw string with a declared media type
    Text { content: String, content_type: String },
    /// A raw byte array with a declared media type
    Binary { bytes: Vec<u8>, content_type: String },
}

impl Default for RequestBody {
    fn default() -> Self {
        RequestBody::Empty
    }
}

/// A single part of a multipart form
#[derive(Debug, Clone)]
pub enum MultipartField {
    /// Scalar field
    Text { name: String, value: String },
    /// File referenced by path, streamed at send time
    FilePath { name: String, path: PathBuf },
    /// In-memory file content with an explicit filename
    FileBytes {
        name: String,
        filename: String,
        bytes: Vec<u8>,
    },
}

/// A body lowered onto the wire representation reqwest expects
#[derive(Debug)]
pub(crate) enum EncodedBody {
    None,
    Body { body: Body, content_type: String },
    Multipart(Form),
}

impl RequestBody {
    /// Encode this body mode into the concrete reqwest representation.
    ///
    /// File-backed modes open their files here, at send time; a missing or
    /// unreadable file surfaces as `TransportError::Io`.
    pub(crate) async fn encode(&self) -> TransportResult<EncodedBody> {
        match self {
            RequestBody::Empty => Ok(EncodedBody::None),
            RequestBody::Form(fields) => Ok(EncodedBody::Body {
                body: Body::from(encode_form_fields(fields)),
                content_type: "application/x-www-form-urlencoded".to_string(),
            }),
            RequestBody::Multipart(fields) => encode_multipart(fields).await,
            RequestBody::File { path, content_type } => {
                let file = tokio::fs::File::open(path).await?;
                Ok(EncodedBody::Body {
                    body: Body::wrap_stream(ReaderStream::new(file)),
                    content_type: content_type.clone(),
                })
            }
            RequestBody::Text { content, content_type } => Ok(EncodedBody::Body {
                body: Body::from(content.clone().into_bytes()),
                content_type: content_type.clone(),
            }),
            RequestBody::Binary { bytes, content_type } => Ok(EncodedBody::Body {
                body: Body::from(bytes.clone()),
                content_type: content_type.clone(),
            }),
        }
    }
}

/// Percent-encode form fields into a `key=value&key=value` byte string
fn encode_form_fields(fields: &[(String, String)]) -> Vec<u8> {
    let mut form_data = Vec::new();
    let mut first = true;

    for (key, value) in fields {
        if !first {
            form_data.push(b'&');
        }
        first = false;

        let encoded_key = urlencoding::encode(key);
        let encoded_value = urlencoding::encode(value);
        form_data.extend_from_slice(encoded_key.as_bytes());
        form_data.push(b'=');
        form_data.extend_from_slice(encoded_value.as_bytes());
    }

    form_data
}

async fn encode_multipart(fields: &[MultipartField]) -> TransportResult<EncodedBody> {
    let mut form = Form::new();

    for field in fields {
        match field {
            MultipartField::Text { name, value } => {
                form = form.text(name.clone(), value.clone());
            }
            MultipartField::FilePath { name, path } => {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .ok_or_else(|| {
                        TransportError::Body(format!(
                            "Multipart file path has no file name: {}",
                            path.display()
                        ))
                    })?;
                let file = tokio::fs::File::open(path).await?;
                let part = Part::stream(Body::wrap_stream(ReaderStream::new(file)))
                    .file_name(filename);
                form = form.part(name.clone(), part);
            }
            MultipartField::FileBytes {
                name,
                filename,
                bytes,
            } => {
                let part = Part::bytes(bytes.clone()).file_name(filename.clone());
                form = form.part(name.clone(), part);
            }
        }
    }

    Ok(EncodedBody::Multipart(form))
}
