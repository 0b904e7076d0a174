//! Engine-backed translator implementation

use async_trait::async_trait;
use glot_config::UpstreamConfig;
use reqwest::Client;
use secrecy::ExposeSecret;
use url::Url;

use super::Translator;
use crate::error::TranslateError;
use crate::protocol::deepl::FlatPayload;
use crate::types::{TranslationRequest, TranslationResult};

/// Translator that forwards requests to the translation engine over HTTP
pub struct UpstreamTranslator {
    client: Client,
    endpoint: Url,
}

impl UpstreamTranslator {
    /// Create from engine configuration
    ///
    /// The proxy, when configured, is wired into the HTTP client here, so
    /// every engine call after startup goes through it without further
    /// plumbing.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is missing, the timeout or proxy is
    /// invalid, or the HTTP client cannot be built
    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let endpoint = config
            .url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("upstream.url must be configured"))?;

        let mut builder = Client::builder().timeout(config.request_timeout()?);

        if let Some(proxy) = &config.proxy {
            tracing::info!(proxy = %proxy, "routing engine traffic through proxy");
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }

        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Translator for UpstreamTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult, TranslateError> {
        let payload = FlatPayload {
            text: request.text.clone(),
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
            tag_handling: request.tag_handling.as_str().to_owned(),
        };

        let mut builder = self.client.post(self.endpoint.clone()).json(&payload);

        if let Some(session) = &request.session {
            builder = builder.header(
                http::header::COOKIE,
                format!("dl_session={}", session.expose_secret()),
            );
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "engine request failed");
            TranslateError::Transport(e.to_string())
        })?;

        // The engine mirrors its verdict into the body's `code` field, so
        // the body is parsed the same way for any HTTP status.
        response
            .json()
            .await
            .map_err(|e| TranslateError::Transport(format!("unreadable engine response: {e}")))
    }
}
