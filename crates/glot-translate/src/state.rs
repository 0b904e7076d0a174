//! Shared state for the dialect route handlers

use std::sync::Arc;
use std::time::Duration;

use glot_config::Config;
use secrecy::SecretString;

use crate::error::TranslateError;
use crate::translator::{Translator, UpstreamTranslator};
use crate::types::{TranslationRequest, TranslationResult};

/// Shared state behind every dialect handler, cheap to clone
#[derive(Clone)]
pub struct TranslateState {
    inner: Arc<TranslateStateInner>,
}

struct TranslateStateInner {
    translator: Arc<dyn Translator>,
    default_session: Option<SecretString>,
    stream_pace: Duration,
}

impl TranslateState {
    /// Build from configuration, wiring up the engine-backed translator
    ///
    /// # Errors
    ///
    /// Returns an error if the engine client cannot be constructed or a
    /// configured duration is invalid
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let translator = UpstreamTranslator::from_config(&config.upstream)?;
        Ok(Self::new(
            Arc::new(translator),
            config.upstream.dl_session.clone(),
            config.chat.stream_pace()?,
        ))
    }

    /// Build from parts, letting tests substitute the translator
    pub fn new(
        translator: Arc<dyn Translator>,
        default_session: Option<SecretString>,
        stream_pace: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(TranslateStateInner {
                translator,
                default_session,
                stream_pace,
            }),
        }
    }

    /// Execute one translation against the configured backend
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult, TranslateError> {
        self.inner.translator.translate(request).await
    }

    /// Default pro-dialect session from configuration
    pub fn default_session(&self) -> Option<&SecretString> {
        self.inner.default_session.as_ref()
    }

    /// Pacing delay between streamed chunks
    pub fn stream_pace(&self) -> Duration {
        self.inner.stream_pace
    }
}
