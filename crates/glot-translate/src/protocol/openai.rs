//! `OpenAI` chat completion API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// `OpenAI` chat completion request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier, selects the language pair
    #[serde(default)]
    pub model: String,
    /// Conversation messages, only the last one is translated
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Whether to stream the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// `OpenAI` message within a request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    #[serde(default)]
    pub role: String,
    /// Text content
    #[serde(default)]
    pub content: String,
}

// -- Response types --

/// `OpenAI` chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response identifier
    pub id: String,
    /// Object type (always "chat.completion")
    pub object: String,
    /// Creation timestamp
    pub created: u64,
    /// Model used
    pub model: String,
    /// Generated choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    pub usage: ChatUsage,
}

/// Choice within a chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Choice index
    pub index: u32,
    /// Generated message
    pub message: ChatChoiceMessage,
    /// Why generation stopped
    pub finish_reason: String,
}

/// Message within a chat completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoiceMessage {
    /// Role (always "assistant")
    pub role: String,
    /// Translated text
    pub content: String,
}

/// Token usage in a chat completion response
///
/// The gateway has no tokenizer, so counts are Unicode code points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatUsage {
    /// Code points in the source text
    pub prompt_tokens: u32,
    /// Code points in the translated text
    pub completion_tokens: u32,
    /// Sum of the above
    pub total_tokens: u32,
}

/// Error shape of the chat completions dialect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatErrorEnvelope {
    /// Human-readable message
    pub error: String,
}

// -- Streaming types --

/// `OpenAI` streaming chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    /// Chunk identifier, shared by every chunk of one response
    pub id: String,
    /// Object type (always "chat.completion.chunk")
    pub object: String,
    /// Creation timestamp
    pub created: u64,
    /// Model used
    pub model: String,
    /// Delta choices
    pub choices: Vec<ChunkChoice>,
}

/// Choice within a streaming chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkChoice {
    /// Choice index
    pub index: u32,
    /// Incremental delta
    pub delta: ChunkDelta,
    /// Finish reason, serialized as null until the final content chunk
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Delta content within a streaming choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkDelta {
    /// Role (present on first chunk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Incremental text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
