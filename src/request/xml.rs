//! Request helpers (XML).
//!
//! XML payloads go through `quick-xml`'s serde integration. The root
//! element name comes from the Rust type name, as `quick_xml::se` does.

use super::common::{ensure_ok, read_text, send_get, send_post};
use crate::config::HttpConfig;
use crate::error::HttpError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Content type for XML POST bodies.
pub(super) const XML_CONTENT_TYPE: &str = "application/xml;charset=utf-8";

/// GET `uri` and decode the XML response body into `T`.
pub async fn get_xml<T: DeserializeOwned>(config: &HttpConfig, uri: &str) -> Result<T, HttpError> {
    let response = ensure_ok(uri, send_get(config, uri).await?)?;
    let text = read_text(uri, response).await?;
    quick_xml::de::from_str(&text).map_err(|e| HttpError::Decode(e.to_string()))
}

/// POST `body` as XML to `uri` and decode the XML response body into `T`.
pub async fn post_xml_into<B: Serialize, T: DeserializeOwned>(
    config: &HttpConfig,
    uri: &str,
    body: &B,
) -> Result<T, HttpError> {
    let payload = quick_xml::se::to_string(body)
        .map_err(|e| HttpError::Encode(e.to_string()))?
        .into_bytes();
    let response = ensure_ok(uri, send_post(config, uri, XML_CONTENT_TYPE, payload).await?)?;
    let text = read_text(uri, response).await?;
    quick_xml::de::from_str(&text).map_err(|e| HttpError::Decode(e.to_string()))
}
