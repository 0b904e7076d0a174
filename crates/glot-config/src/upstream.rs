use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Translation engine connection settings
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Endpoint the gateway forwards translation requests to
    pub url: Option<Url>,

    /// Optional HTTP proxy for engine traffic
    pub proxy: Option<Url>,

    /// Default session credential attached to pro-dialect requests
    pub dl_session: Option<SecretString>,

    /// Request timeout as a human-readable duration
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: None,
            proxy: None,
            dl_session: None,
            timeout: default_timeout(),
        }
    }
}

impl UpstreamConfig {
    /// Parsed request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the configured duration string is invalid
    pub fn request_timeout(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout).map_err(|e| anyhow::anyhow!("invalid upstream.timeout: {e}"))
    }
}

fn default_timeout() -> String {
    "30s".to_string()
}
