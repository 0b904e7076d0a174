//! Streamed delivery emulation for the chat completions dialect
//!
//! The engine translates in one shot, so streaming is emulated: the finished
//! text is replayed one code point at a time behind an optional pacing delay.

use std::time::Duration;

use futures_util::Stream;

use crate::convert::openai::unix_now;
use crate::protocol::openai::{ChatCompletionChunk, ChunkChoice, ChunkDelta};

/// Event within an emulated stream
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A chunk object to frame as an SSE data line
    Chunk(ChatCompletionChunk),
    /// Terminal marker, framed as the literal `[DONE]` line
    Done,
}

/// Emission order: role announcement, one chunk per code point, a stop
/// chunk, then the terminal marker. Empty text skips straight from the
/// role announcement to the stop chunk.
enum Phase {
    Role,
    Content,
    Finish,
    Done,
    Closed,
}

struct Emulator {
    id: String,
    created: u64,
    model: String,
    chars: Vec<char>,
    next: usize,
    pace: Duration,
    phase: Phase,
}

impl Emulator {
    fn chunk(&self, delta: ChunkDelta, finish_reason: Option<&str>) -> ChatCompletionChunk {
        ChatCompletionChunk {
            id: self.id.clone(),
            object: "chat.completion.chunk".to_owned(),
            created: self.created,
            model: self.model.clone(),
            choices: vec![ChunkChoice {
                index: 0,
                delta,
                finish_reason: finish_reason.map(str::to_owned),
            }],
        }
    }
}

/// Replay translated text as a paced chunk stream
///
/// The stream copies its inputs up front and captures no borrows. A zero
/// `pace` disables the inter-chunk delay. Delays run inside the stream, so
/// dropping it cancels any backlog immediately.
pub fn emulate(
    text: &str,
    model: &str,
    pace: Duration,
) -> impl Stream<Item = StreamEvent> + Send + use<> {
    let created = unix_now();
    let emulator = Emulator {
        id: format!("chatcmpl-{created}"),
        created,
        model: model.to_owned(),
        chars: text.chars().collect(),
        next: 0,
        pace,
        phase: Phase::Role,
    };

    futures_util::stream::unfold(emulator, |mut emulator| async move {
        match emulator.phase {
            Phase::Role => {
                emulator.phase = if emulator.chars.is_empty() {
                    Phase::Finish
                } else {
                    Phase::Content
                };
                let delta = ChunkDelta {
                    role: Some("assistant".to_owned()),
                    content: None,
                };
                let chunk = emulator.chunk(delta, None);
                Some((StreamEvent::Chunk(chunk), emulator))
            }
            Phase::Content => {
                if !emulator.pace.is_zero() {
                    tokio::time::sleep(emulator.pace).await;
                }
                let piece = emulator
                    .chars
                    .get(emulator.next)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                emulator.next += 1;
                if emulator.next >= emulator.chars.len() {
                    emulator.phase = Phase::Finish;
                }
                let delta = ChunkDelta {
                    role: None,
                    content: Some(piece),
                };
                let chunk = emulator.chunk(delta, None);
                Some((StreamEvent::Chunk(chunk), emulator))
            }
            Phase::Finish => {
                emulator.phase = Phase::Done;
                let chunk = emulator.chunk(ChunkDelta::default(), Some("stop"));
                Some((StreamEvent::Chunk(chunk), emulator))
            }
            Phase::Done => {
                emulator.phase = Phase::Closed;
                Some((StreamEvent::Done, emulator))
            }
            Phase::Closed => None,
        }
    })
}
