//! Request helpers (raw body).

use super::common::{ensure_ok, read_bytes, send_get};
use crate::config::HttpConfig;
use crate::error::HttpError;

/// GET `uri` and return the full response body.
pub async fn get_body(config: &HttpConfig, uri: &str) -> Result<Vec<u8>, HttpError> {
    let response = ensure_ok(uri, send_get(config, uri).await?)?;
    read_bytes(uri, response).await
}
