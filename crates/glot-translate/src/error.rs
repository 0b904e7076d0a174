use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while normalizing or executing a translation
///
/// Each variant renders as the exact client-facing message the dialects
/// promise, so handlers serialize `to_string()` directly into envelopes.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Request body could not be parsed into the dialect's shape
    #[error("Invalid request payload")]
    InvalidPayload,

    /// Unsupported markup handling mode
    #[error("Invalid tag_handling value. Allowed values are 'html' and 'xml'.")]
    InvalidTagHandling,

    /// Request carried no text to translate
    #[error("No text to translate")]
    EmptyText,

    /// Request named no target language
    #[error("No target language specified")]
    MissingTargetLang,

    /// Chat request carried no messages
    #[error("No messages provided")]
    NoMessages,

    /// Pro dialect request without a usable session credential
    #[error("No dl_session Found")]
    MissingSession,

    /// Session credential belongs to a free-tier account
    #[error("Your account is not a Pro account. Please upgrade your account or switch to a different account.")]
    NotProAccount,

    /// Engine could not be reached or returned an unreadable body
    #[error("Translation failed: {0}")]
    Transport(String),
}

impl TranslateError {
    /// HTTP status the error maps to
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::InvalidTagHandling | Self::MissingTargetLang | Self::NoMessages => {
                StatusCode::BAD_REQUEST
            }
            Self::EmptyText => StatusCode::NOT_FOUND,
            Self::MissingSession | Self::NotProAccount => StatusCode::UNAUTHORIZED,
            Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
