//! HTTP configuration and the process-wide configuration store.
//!
//! Every request helper reads its settings from one `HttpConfig`. The
//! free functions at the bottom ([`set_timeout`], [`set_proxy`], …) mutate
//! a global instance behind a `RwLock`; helpers clone a snapshot exactly
//! once per call, so an in-flight request never observes a mid-flight
//! mutation.

use crate::defaults;
use crate::error::BoxError;
use reqwest::Url;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use std::time::Duration;

/// Resolves the proxy to use for one outgoing request.
///
/// Consulted once per request with the target URL. `Ok(Some(url))` routes
/// the request through `url`, `Ok(None)` connects directly, and `Err`
/// aborts the request before anything is sent.
pub trait ProxyResolver: Send + Sync {
    /// Pick the proxy for a request to `target`.
    fn resolve(&self, target: &Url) -> Result<Option<Url>, BoxError>;
}

impl<F> ProxyResolver for F
where
    F: Fn(&Url) -> Result<Option<Url>, BoxError> + Send + Sync,
{
    fn resolve(&self, target: &Url) -> Result<Option<Url>, BoxError> {
        self(target)
    }
}

/// HTTP configuration
#[derive(Clone)]
pub struct HttpConfig {
    /// Request timeout; `None` disables it
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// User agent
    pub user_agent: Option<String>,
    /// Proxy resolver consulted once per request
    pub proxy: Option<Arc<dyn ProxyResolver>>,
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy.as_ref().map(|_| "<resolver>"))
            .finish()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
            proxy: None,
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }
}

/// Builder for `HttpConfig` to construct configuration in a unified and safe way
///
/// Starts from [`HttpConfig::default`]; unset fields keep the stock values.
#[derive(Clone)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: HttpConfig::default(),
        }
    }

    /// Request timeout; `None` disables it
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Connection timeout; `None` disables it
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.config.connect_timeout = connect_timeout;
        self
    }

    /// User agent header sent with every request
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.config.user_agent = user_agent.map(|s| s.into());
        self
    }

    /// Install a proxy resolver
    pub fn proxy<R: ProxyResolver + 'static>(mut self, resolver: R) -> Self {
        self.config.proxy = Some(Arc::new(resolver));
        self
    }

    /// Build the configuration
    pub fn build(self) -> HttpConfig {
        self.config
    }
}

impl Default for HttpConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Global configuration instance read by the crate-root request helpers
lazy_static::lazy_static! {
    static ref GLOBAL_CONFIG: RwLock<HttpConfig> = RwLock::new(HttpConfig::default());
}

fn write_global() -> RwLockWriteGuard<'static, HttpConfig> {
    GLOBAL_CONFIG.write().unwrap_or_else(PoisonError::into_inner)
}

/// Snapshot of the process-wide configuration.
pub fn config() -> HttpConfig {
    GLOBAL_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide configuration.
pub fn set_config(config: HttpConfig) {
    *write_global() = config;
}

/// Set the request timeout used by all subsequent requests.
///
/// `Duration::ZERO` disables the timeout.
pub fn set_timeout(timeout: Duration) {
    write_global().timeout = if timeout.is_zero() {
        None
    } else {
        Some(timeout)
    };
}

/// Install the proxy resolver used by all subsequent requests.
pub fn set_proxy<R: ProxyResolver + 'static>(resolver: R) {
    write_global().proxy = Some(Arc::new(resolver));
}

/// Remove the proxy resolver; subsequent requests connect directly.
pub fn clear_proxy() {
    write_global().proxy = None;
}
