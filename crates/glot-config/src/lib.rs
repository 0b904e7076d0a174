#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod chat;
pub mod cors;
mod env;
mod loader;
pub mod server;
pub mod upstream;

use serde::Deserialize;

pub use auth::AuthConfig;
pub use chat::ChatConfig;
pub use cors::{AllowList, CorsConfig};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

/// Top-level glot configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener and CORS configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Static access token gate
    #[serde(default)]
    pub auth: AuthConfig,
    /// Translation engine endpoint
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Chat-completions dialect behavior
    #[serde(default)]
    pub chat: ChatConfig,
}
