//! Conversion between the canonical types and the chat completions format

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TranslateError;
use crate::protocol::openai::{
    ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionResponse, ChatUsage,
};
use crate::types::{TagHandling, TranslationRequest};

/// Inline command that overrides the model-derived language pair
const COMMAND_PREFIX: &str = "Translate to ";

/// Target used when neither the model nor a command names one
const DEFAULT_TARGET_LANG: &str = "ZH";

/// Language pairs selectable by model name, `(model, (source, target))`
const MODEL_LANGUAGE_PAIRS: &[(&str, (&str, &str))] = &[
    ("glot-en-to-zh", ("EN", "ZH")),
    ("glot-zh-to-en", ("ZH", "EN")),
    ("glot-auto-to-en", ("", "EN")),
];

// -- Inbound: chat request -> canonical request --

/// Normalize a chat completions request
///
/// The last message is the translation input. Its language pair comes from
/// the model name, unless the content starts with `Translate to X:`, which
/// re-extracts both the target language and the payload.
///
/// # Errors
///
/// Returns an error if the request carries no messages, the resulting text
/// is empty, or no target language can be derived
pub fn from_chat_request(request: &ChatCompletionRequest) -> Result<TranslationRequest, TranslateError> {
    let last = request.messages.last().ok_or(TranslateError::NoMessages)?;
    let (source_lang, target_lang, text) = language_pair_for(&request.model, &last.content);

    if text.is_empty() {
        return Err(TranslateError::EmptyText);
    }
    if target_lang.is_empty() {
        return Err(TranslateError::MissingTargetLang);
    }

    Ok(TranslationRequest {
        source_lang: source_lang.to_owned(),
        target_lang: target_lang.to_owned(),
        text: text.to_owned(),
        tag_handling: TagHandling::None,
        session: None,
    })
}

/// Derive `(source, target, text)` from the model name and message content
fn language_pair_for<'a>(model: &'a str, content: &'a str) -> (&'a str, &'a str, &'a str) {
    // Inline command wins over the model table
    if let Some(rest) = content.strip_prefix(COMMAND_PREFIX)
        && let Some((target, payload)) = rest.split_once(':')
    {
        return ("", target.trim(), payload.trim());
    }

    let (source, target) = MODEL_LANGUAGE_PAIRS
        .iter()
        .find(|(name, _)| *name == model)
        .map_or(("", DEFAULT_TARGET_LANG), |(_, pair)| *pair);

    (source, target, content)
}

// -- Outbound: canonical result -> chat response --

/// Build a buffered chat completion response
pub fn completion_response(model: &str, input: &str, translated: &str) -> ChatCompletionResponse {
    let now = unix_now();
    let prompt_tokens = count_code_points(input);
    let completion_tokens = count_code_points(translated);

    ChatCompletionResponse {
        id: format!("chatcmpl-{now}"),
        object: "chat.completion".to_owned(),
        created: now,
        model: model.to_owned(),
        choices: vec![ChatChoice {
            index: 0,
            message: ChatChoiceMessage {
                role: "assistant".to_owned(),
                content: translated.to_owned(),
            },
            finish_reason: "stop".to_owned(),
        }],
        usage: ChatUsage {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        },
    }
}

/// Unicode code points, the usage unit of a gateway without a tokenizer
fn count_code_points(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::openai::ChatMessage;

    fn chat(model: &str, content: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: content.to_string(),
            }],
            stream: None,
        }
    }

    #[test]
    fn model_name_selects_language_pair() {
        let request = from_chat_request(&chat("glot-zh-to-en", "你好")).unwrap();
        assert_eq!(request.source_lang, "ZH");
        assert_eq!(request.target_lang, "EN");
        assert_eq!(request.text, "你好");
    }

    #[test]
    fn unknown_model_falls_back_to_default_target() {
        let request = from_chat_request(&chat("gpt-4o", "Hello")).unwrap();
        assert_eq!(request.source_lang, "");
        assert_eq!(request.target_lang, "ZH");
    }

    #[test]
    fn command_prefix_overrides_model_pair() {
        let request = from_chat_request(&chat("glot-zh-to-en", "Translate to FR: Hello")).unwrap();
        assert_eq!(request.source_lang, "");
        assert_eq!(request.target_lang, "FR");
        assert_eq!(request.text, "Hello");
    }

    #[test]
    fn command_without_colon_is_plain_text() {
        let request = from_chat_request(&chat("glot-en-to-zh", "Translate to French please")).unwrap();
        assert_eq!(request.target_lang, "ZH");
        assert_eq!(request.text, "Translate to French please");
    }

    #[test]
    fn only_last_message_is_translated() {
        let request = ChatCompletionRequest {
            model: "glot-en-to-zh".to_string(),
            messages: vec![
                ChatMessage {
                    role: "user".to_string(),
                    content: "earlier".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "latest".to_string(),
                },
            ],
            stream: None,
        };
        assert_eq!(from_chat_request(&request).unwrap().text, "latest");
    }

    #[test]
    fn empty_conversation_is_rejected() {
        let request = ChatCompletionRequest::default();
        let err = from_chat_request(&request).unwrap_err();
        assert!(matches!(err, TranslateError::NoMessages));
    }

    #[test]
    fn empty_command_payload_is_rejected() {
        let err = from_chat_request(&chat("glot-en-to-zh", "Translate to FR:  ")).unwrap_err();
        assert!(matches!(err, TranslateError::EmptyText));
    }

    #[test]
    fn usage_counts_code_points_not_bytes() {
        let response = completion_response("glot-en-to-zh", "hi 🌍", "你好");
        assert_eq!(response.usage.prompt_tokens, 4);
        assert_eq!(response.usage.completion_tokens, 2);
        assert_eq!(response.usage.total_tokens, 6);
    }

    #[test]
    fn buffered_response_has_single_stop_choice() {
        let response = completion_response("glot-en-to-zh", "Hello", "你好");
        assert_eq!(response.object, "chat.completion");
        assert_eq!(response.model, "glot-en-to-zh");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].finish_reason, "stop");
        assert_eq!(response.choices[0].message.role, "assistant");
        assert_eq!(response.choices[0].message.content, "你好");
        assert!(response.id.starts_with("chatcmpl-"));
    }
}
