use std::net::SocketAddr;

use serde::Deserialize;

use crate::cors::CorsConfig;

/// HTTP listener settings
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the gateway binds to, defaults to `0.0.0.0:1188`
    pub listen_address: Option<SocketAddr>,

    /// Cross-origin resource sharing policy
    #[serde(default)]
    pub cors: CorsConfig,
}
