//! Conversion between the canonical translation types and wire formats
//!
//! Each submodule handles normalization and envelope building for one
//! family of dialects.

pub mod deepl;
pub mod openai;
