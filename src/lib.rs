//! httpkit
//!
//! Convenience HTTP request helpers for JSON, XML, multipart upload, and
//! file download, sharing one process-wide configuration (request timeout,
//! optional proxy). A thin facade over `reqwest`: every call builds a fresh
//! client from the configuration current at that moment, issues the
//! request, requires `200 OK`, and decodes or relays the body.
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use std::time::Duration;
//!
//! #[derive(Deserialize)]
//! struct Status {
//!     ok: bool,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), httpkit::HttpError> {
//!     httpkit::set_timeout(Duration::from_secs(10));
//!     let status: Status = httpkit::get_json("https://example.com/status").await?;
//!     assert!(status.ok);
//!     Ok(())
//! }
//! ```
//!
//! Callers that manage their own configuration can use the functions in
//! [`request`] directly; the crate-root helpers below read the global
//! configuration installed via [`set_timeout`], [`set_proxy`] or
//! [`set_config`].
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod request;

pub use config::{HttpConfig, HttpConfigBuilder, ProxyResolver};
pub use config::{clear_proxy, config, set_config, set_proxy, set_timeout};
pub use error::{BoxError, HttpError, Result};
pub use request::FormField;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// GET `uri` and decode the JSON response body into `T`.
pub async fn get_json<T: DeserializeOwned>(uri: &str) -> Result<T> {
    request::get_json(&config(), uri).await
}

/// GET `uri` and decode the XML response body into `T`.
pub async fn get_xml<T: DeserializeOwned>(uri: &str) -> Result<T> {
    request::get_xml(&config(), uri).await
}

/// GET `uri` and return the full response body.
pub async fn get_body(uri: &str) -> Result<Vec<u8>> {
    request::get_body(&config(), uri).await
}

/// POST `body` as JSON to `uri` and return the raw response bytes.
pub async fn post_json<B: Serialize>(uri: &str, body: &B) -> Result<Vec<u8>> {
    request::post_json(&config(), uri, body).await
}

/// POST `body` as JSON to `uri` and decode the JSON response body into `T`.
///
/// `content_type` overrides the default `application/json;charset=utf-8`
/// request content type.
pub async fn post_json_into<B: Serialize, T: DeserializeOwned>(
    uri: &str,
    body: &B,
    content_type: Option<&str>,
) -> Result<T> {
    request::post_json_into(&config(), uri, body, content_type).await
}

/// POST `body` as XML to `uri` and decode the XML response body into `T`.
pub async fn post_xml_into<B: Serialize, T: DeserializeOwned>(uri: &str, body: &B) -> Result<T> {
    request::post_xml_into(&config(), uri, body).await
}

/// Upload a single file field to `uri` and return the raw response bytes.
pub async fn post_file(
    field_name: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
    uri: &str,
) -> Result<Vec<u8>> {
    request::post_file(&config(), field_name, filename, content_type, data, uri).await
}

/// POST `fields` to `uri` as one `multipart/form-data` request and return
/// the raw response bytes.
pub async fn post_multipart_form(fields: &[FormField], uri: &str) -> Result<Vec<u8>> {
    request::post_multipart_form(&config(), fields, uri).await
}

/// GET `uri` and stream the response body into a file at `dest`.
pub async fn download_file(dest: impl AsRef<Path>, uri: &str) -> Result<()> {
    request::download_file(&config(), dest, uri).await
}
