//! Default Configuration Values
//!
//! This module centralizes all default values used throughout httpkit.
//! Having defaults in one place makes them easier to maintain, document, and adjust.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    ///
    /// Set to 60 seconds to accommodate slow upstreams plus network latency
    /// and proxy delays.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    ///
    /// Set to 10 seconds which is sufficient for most network conditions
    /// while not being too aggressive.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = "httpkit/0.1.0";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_defaults() {
        assert_eq!(http::REQUEST_TIMEOUT, Duration::from_secs(60));
        assert_eq!(http::CONNECT_TIMEOUT, Duration::from_secs(10));
        assert_eq!(http::USER_AGENT, "httpkit/0.1.0");
    }
}
