//! Request helpers (JSON).

use super::common::{ensure_ok, read_bytes, read_text, send_get, send_post};
use crate::config::HttpConfig;
use crate::error::HttpError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default content type for JSON POST bodies.
pub(super) const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// GET `uri` and decode the JSON response body into `T`.
pub async fn get_json<T: DeserializeOwned>(config: &HttpConfig, uri: &str) -> Result<T, HttpError> {
    let response = ensure_ok(uri, send_get(config, uri).await?)?;
    let text = read_text(uri, response).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST `body` as JSON to `uri` and return the raw response bytes.
pub async fn post_json<B: Serialize>(
    config: &HttpConfig,
    uri: &str,
    body: &B,
) -> Result<Vec<u8>, HttpError> {
    let payload = serde_json::to_vec(body).map_err(|e| HttpError::Encode(e.to_string()))?;
    let response = ensure_ok(uri, send_post(config, uri, JSON_CONTENT_TYPE, payload).await?)?;
    read_bytes(uri, response).await
}

/// POST `body` as JSON to `uri` and decode the JSON response body into `T`.
///
/// `content_type` overrides the default `application/json;charset=utf-8`
/// request content type.
pub async fn post_json_into<B: Serialize, T: DeserializeOwned>(
    config: &HttpConfig,
    uri: &str,
    body: &B,
    content_type: Option<&str>,
) -> Result<T, HttpError> {
    let payload = serde_json::to_vec(body).map_err(|e| HttpError::Encode(e.to_string()))?;
    let content_type = content_type.unwrap_or(JSON_CONTENT_TYPE);
    let response = ensure_ok(uri, send_post(config, uri, content_type, payload).await?)?;
    let text = read_text(uri, response).await?;
    Ok(serde_json::from_str(&text)?)
}
