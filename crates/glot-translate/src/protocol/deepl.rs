//! DeepL-style API wire format types
//!
//! Covers the legacy free dialect, the session-based pro dialect, and the
//! official-style v2 dialect. The flat payload doubles as the body the
//! gateway sends to the translation engine.

use serde::{Deserialize, Serialize};

// -- Request types --

/// Flat translation request, shared by the free and pro dialects and by the
/// engine call itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatPayload {
    /// Text to translate
    pub text: String,
    /// Source language code, empty means auto-detect
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Markup handling mode, "html" or "xml"
    pub tag_handling: String,
}

/// Form-encoded body of the v2 dialect
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficialForm {
    /// Text to translate
    #[serde(default)]
    pub text: String,
    /// Target language code
    #[serde(default)]
    pub target_lang: String,
}

/// JSON body of the v2 dialect
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OfficialPayload {
    /// Text segments, joined with newlines before translation
    pub text: Vec<String>,
    /// Target language code
    pub target_lang: String,
}

// -- Response types --

/// Status-and-message envelope
///
/// Serves as the banner body, the catch-all 404 body, the auth failure body,
/// and the error shape of the free and pro dialects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEnvelope {
    /// Status code mirrored from the HTTP response
    pub code: u16,
    /// Human-readable message
    pub message: String,
}

impl StatusEnvelope {
    /// Build an envelope with the given code and message
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Successful response of the free and pro dialects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateEnvelope {
    /// Always 200
    pub code: u16,
    /// Engine-assigned request identifier
    pub id: i64,
    /// Translated text
    pub data: String,
    /// Alternative translations
    pub alternatives: Vec<String>,
    /// Detected or requested source language
    pub source_lang: String,
    /// Target language
    pub target_lang: String,
    /// Account tier the engine used
    pub method: String,
}

/// Successful response of the v2 dialect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialEnvelope {
    /// One entry per request, the gateway always produces exactly one
    pub translations: Vec<OfficialTranslation>,
}

/// Single translation within an official-style response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialTranslation {
    /// Language the engine detected or was told
    pub detected_source_language: String,
    /// Translated text
    pub text: String,
}
