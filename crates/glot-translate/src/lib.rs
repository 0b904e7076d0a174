//! Core translation crate for Glot
//!
//! Exposes one translation capability through several API dialects (the
//! legacy free JSON API, the session-based pro API, the official-style v2
//! API, and an `OpenAI`-compatible chat completions API), forwarding every
//! request to a single translation engine endpoint.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod state;
pub mod stream;
pub mod translator;
pub mod types;

pub use error::TranslateError;
pub use handler::dialect_router;
pub use state::TranslateState;
pub use translator::{Translator, UpstreamTranslator};
pub use types::{TagHandling, TranslationRequest, TranslationResult};
