//! Conversion between the canonical types and the DeepL-style wire formats

use secrecy::{ExposeSecret, SecretString};

use crate::error::TranslateError;
use crate::protocol::deepl::{FlatPayload, OfficialEnvelope, OfficialPayload, OfficialTranslation, TranslateEnvelope};
use crate::types::{TagHandling, TranslationRequest, TranslationResult};

/// Cookie pair carrying the pro session credential
const SESSION_COOKIE_KEY: &str = "dl_session=";

// -- Inbound: wire payloads -> canonical request --

/// Normalize a free-dialect payload
///
/// # Errors
///
/// Returns an error if the markup mode is unsupported, the text is empty,
/// or no target language is given
pub fn from_flat_payload(payload: &FlatPayload) -> Result<TranslationRequest, TranslateError> {
    let tag_handling = TagHandling::parse(&payload.tag_handling).ok_or(TranslateError::InvalidTagHandling)?;
    validate_text(&payload.text, &payload.target_lang)?;

    Ok(TranslationRequest {
        source_lang: payload.source_lang.clone(),
        target_lang: payload.target_lang.clone(),
        text: payload.text.clone(),
        tag_handling,
        session: None,
    })
}

/// Normalize a pro-dialect payload
///
/// The session comes from the request's `Cookie` header when it carries a
/// `dl_session` pair, otherwise from the configured default. Markup
/// validation runs before the session is inspected.
///
/// # Errors
///
/// Returns an error on an unsupported markup mode, a missing or free-tier
/// session, empty text, or a missing target language
pub fn from_pro_payload(
    payload: &FlatPayload,
    cookie: Option<&str>,
    default_session: Option<&SecretString>,
) -> Result<TranslationRequest, TranslateError> {
    let tag_handling = TagHandling::parse(&payload.tag_handling).ok_or(TranslateError::InvalidTagHandling)?;
    let session = resolve_session(cookie, default_session)?;
    validate_text(&payload.text, &payload.target_lang)?;

    Ok(TranslationRequest {
        source_lang: payload.source_lang.clone(),
        target_lang: payload.target_lang.clone(),
        text: payload.text.clone(),
        tag_handling,
        session: Some(session),
    })
}

/// Normalize a v2-dialect payload, joining text segments with newlines
///
/// # Errors
///
/// Returns an error if no text segments are given or the target language
/// is missing
pub fn from_official_payload(payload: &OfficialPayload) -> Result<TranslationRequest, TranslateError> {
    let text = payload.text.join("\n");
    validate_text(&text, &payload.target_lang)?;

    Ok(TranslationRequest {
        source_lang: String::new(),
        target_lang: payload.target_lang.clone(),
        text,
        tag_handling: TagHandling::None,
        session: None,
    })
}

/// Reject empty text before missing target, matching the engine's own order
fn validate_text(text: &str, target_lang: &str) -> Result<(), TranslateError> {
    if text.is_empty() {
        return Err(TranslateError::EmptyText);
    }
    if target_lang.is_empty() {
        return Err(TranslateError::MissingTargetLang);
    }
    Ok(())
}

/// Pick the session credential for a pro-dialect request
///
/// A non-empty `dl_session` cookie pair wins over the configured default.
/// A credential containing '.' is a JWT, which marks a free-tier account.
fn resolve_session(
    cookie: Option<&str>,
    default_session: Option<&SecretString>,
) -> Result<SecretString, TranslateError> {
    let from_cookie = cookie.and_then(|header| {
        header
            .split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(SESSION_COOKIE_KEY))
            .map(str::to_owned)
            .filter(|value| !value.is_empty())
    });

    let session = match from_cookie {
        Some(value) => value,
        None => default_session
            .map(|secret| secret.expose_secret().to_owned())
            .unwrap_or_default(),
    };

    if session.is_empty() {
        return Err(TranslateError::MissingSession);
    }
    if session.contains('.') {
        return Err(TranslateError::NotProAccount);
    }

    Ok(SecretString::from(session))
}

// -- Outbound: canonical result -> wire envelopes --

impl From<TranslationResult> for TranslateEnvelope {
    fn from(result: TranslationResult) -> Self {
        Self {
            code: result.code,
            id: result.id,
            data: result.data,
            alternatives: result.alternatives,
            source_lang: result.source_lang,
            target_lang: result.target_lang,
            method: result.method,
        }
    }
}

impl From<TranslationResult> for OfficialEnvelope {
    fn from(result: TranslationResult) -> Self {
        Self {
            translations: vec![OfficialTranslation {
                detected_source_language: result.source_lang,
                text: result.data,
            }],
        }
    }
}
