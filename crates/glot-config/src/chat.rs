use std::time::Duration;

use serde::Deserialize;

/// Chat-completions dialect settings
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Delay between streamed content chunks, `0s` disables pacing
    #[serde(default = "default_stream_interval")]
    pub stream_interval: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            stream_interval: default_stream_interval(),
        }
    }
}

impl ChatConfig {
    /// Parsed inter-chunk delay for streamed responses
    ///
    /// # Errors
    ///
    /// Returns an error if the configured duration string is invalid
    pub fn stream_pace(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.stream_interval)
            .map_err(|e| anyhow::anyhow!("invalid chat.stream_interval: {e}"))
    }
}

fn default_stream_interval() -> String {
    "50ms".to_string()
}
