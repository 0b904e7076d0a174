//! Translator trait and the engine-backed implementation

pub mod upstream;

use async_trait::async_trait;

use crate::error::TranslateError;
use crate::types::{TranslationRequest, TranslationResult};

pub use upstream::UpstreamTranslator;

/// Trait implemented by translation backends
///
/// Two failure classes stay distinct here. `Ok` with a non-200 `code` is an
/// engine verdict the dialects pass through verbatim. `Err` means the engine
/// never answered usably and maps to a scoped 500.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Execute one translation
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult, TranslateError>;
}
