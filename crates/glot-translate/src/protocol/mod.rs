//! Wire format types for each API dialect

pub mod deepl;
pub mod openai;
