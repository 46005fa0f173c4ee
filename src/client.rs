//! HTTP client construction.
//!
//! This module provides the one place where `reqwest::Client` instances are
//! built. Every request helper builds a fresh client from a configuration
//! snapshot; clients are not cached or reused across calls.

use crate::config::HttpConfig;
use crate::error::HttpError;
use reqwest::Url;

/// Build an HTTP client for one request to `target`.
///
/// Pure function of `config` at call time: applies the timeout settings and
/// user agent, and — when a proxy resolver is installed — resolves it
/// against `target` and routes the request through the returned proxy URL.
/// A resolver error fails the call before anything is sent.
pub fn build_client(config: &HttpConfig, target: &Url) -> Result<reqwest::Client, HttpError> {
    let mut builder = reqwest::Client::builder();

    // Apply timeout settings
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    // Apply user agent
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    // Apply proxy settings
    if let Some(resolver) = &config.proxy {
        match resolver.resolve(target).map_err(HttpError::Proxy)? {
            Some(proxy_url) => {
                let proxy = reqwest::Proxy::all(proxy_url.as_str())
                    .map_err(|e| HttpError::ClientBuild(format!("invalid proxy URL: {e}")))?;
                builder = builder.proxy(proxy);
            }
            None => {
                builder = builder.no_proxy();
            }
        }
    }

    // Build the client
    builder
        .build()
        .map_err(|e| HttpError::ClientBuild(format!("failed to create HTTP client: {e}")))
}
