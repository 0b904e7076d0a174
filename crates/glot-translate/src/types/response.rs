use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Translation outcome reported by the engine
///
/// The engine mirrors its HTTP status into `code`, so a deserialized body is
/// authoritative on its own. A non-200 `code` is an upstream verdict to pass
/// through, not a gateway failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationResult {
    /// Engine status code, 200 on success
    pub code: u16,
    /// Engine-assigned request identifier
    pub id: i64,
    /// Human-readable status, populated on failure
    pub message: String,
    /// Translated text
    pub data: String,
    /// Alternative translations
    pub alternatives: Vec<String>,
    /// Detected or requested source language
    pub source_lang: String,
    /// Target language
    pub target_lang: String,
    /// Account tier the engine used, "Free" or "Pro"
    pub method: String,
}

impl TranslationResult {
    /// Whether the engine reported success
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// HTTP status matching the engine's verdict
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
