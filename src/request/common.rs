//! Shared request plumbing: URL parsing, send, status validation, body reads.

use crate::client::build_client;
use crate::config::HttpConfig;
use crate::error::HttpError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode, Url};

pub(super) fn parse_url(uri: &str) -> Result<Url, HttpError> {
    Url::parse(uri).map_err(|e| HttpError::InvalidUrl {
        uri: uri.to_string(),
        message: e.to_string(),
    })
}

pub(super) fn transport(uri: &str, source: reqwest::Error) -> HttpError {
    HttpError::Transport {
        uri: uri.to_string(),
        source,
    }
}

/// Issue a GET request to `uri` with a client built from `config`.
pub(super) async fn send_get(config: &HttpConfig, uri: &str) -> Result<Response, HttpError> {
    let url = parse_url(uri)?;
    let client = build_client(config, &url)?;
    tracing::debug!(%url, "sending GET request");
    client.get(url).send().await.map_err(|e| transport(uri, e))
}

/// POST `body` to `uri` with the given content type.
pub(super) async fn send_post(
    config: &HttpConfig,
    uri: &str,
    content_type: &str,
    body: Vec<u8>,
) -> Result<Response, HttpError> {
    let url = parse_url(uri)?;
    let client = build_client(config, &url)?;
    tracing::debug!(%url, content_type, body_len = body.len(), "sending POST request");
    client
        .post(url)
        .header(CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .map_err(|e| transport(uri, e))
}

/// Require `200 OK`; any other status discards the body.
pub(super) fn ensure_ok(uri: &str, response: Response) -> Result<Response, HttpError> {
    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!(uri, %status, "rejecting response with unexpected status");
        return Err(HttpError::UnexpectedStatus {
            uri: uri.to_string(),
            status,
        });
    }
    Ok(response)
}

/// Fully buffer the response body.
pub(super) async fn read_bytes(uri: &str, response: Response) -> Result<Vec<u8>, HttpError> {
    let bytes = response.bytes().await.map_err(|e| transport(uri, e))?;
    Ok(bytes.to_vec())
}

/// Fully buffer the response body as text.
pub(super) async fn read_text(uri: &str, response: Response) -> Result<String, HttpError> {
    response.text().await.map_err(|e| transport(uri, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_rejects_garbage() {
        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_url_accepts_http() {
        assert!(parse_url("http://example.com/a?b=c").is_ok());
    }
}
