//! Internal canonical types for translation request/response representation
//!
//! These types are dialect-agnostic and serve as the normalized internal
//! representation that all wire formats convert to and from.

pub mod request;
pub mod response;

pub use request::{TagHandling, TranslationRequest};
pub use response::TranslationResult;
