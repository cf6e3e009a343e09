//! HTTP transport layer for the Vaultline REST client.
//!
//! The flow is a single linear sequence: accumulate the pieces of a request
//! with [`HttpRequest`], dispatch it through a shared [`ApiClient`], and
//! inspect the resulting [`HttpResponse`] or deserialize its body into one of
//! the typed models.

pub mod body;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod url_builder;


pub use body::{MultipartField, RequestBody};
pub use client::{ApiClient, ClientConfig};
pub use error::{TransportError, TransportResult};
pub use request::HttpRequest;
pub use response::{HttpResponse, ResponseBody, ResponseOption};

pub use reqwest::Method;
