//! Gateway launcher for integration tests
//!
//! Builds a gateway configuration around a mock engine endpoint and serves
//! the router on an ephemeral local port. Tests talk to it over real HTTP.

use std::net::SocketAddr;

use glot_config::{ChatConfig, Config, ServerConfig, UpstreamConfig};
use glot_server::Server;
use secrecy::SecretString;
use tokio_util::sync::CancellationToken;

/// A gateway serving on an ephemeral local port
///
/// Dropping the handle shuts the gateway down.
pub struct TestServer {
    base_url: String,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

/// Adjusts gateway settings before launch
pub struct TestServerBuilder {
    config: Config,
}

impl TestServer {
    /// Launch a gateway with default settings for the given engine endpoint
    pub async fn start(engine_url: &str) -> anyhow::Result<Self> {
        Self::builder(engine_url).start().await
    }

    /// Configure a gateway pointed at the given engine endpoint
    ///
    /// Defaults leave the dialect routes unguarded, configure no pro
    /// session, and stream without pacing so tests run fast.
    pub fn builder(engine_url: &str) -> TestServerBuilder {
        TestServerBuilder {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                upstream: UpstreamConfig {
                    url: Some(engine_url.parse().expect("valid URL")),
                    ..UpstreamConfig::default()
                },
                chat: ChatConfig {
                    stream_interval: "0s".to_owned(),
                },
                ..Config::default()
            },
        }
    }

    /// Route a request path to the running gateway
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Shared HTTP client for requests against the gateway
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl TestServerBuilder {
    /// Require the given access token on the dialect routes
    pub fn token(mut self, token: &str) -> Self {
        self.config.auth.token = Some(SecretString::from(token));
        self
    }

    /// Configure a default pro session
    pub fn dl_session(mut self, session: &str) -> Self {
        self.config.upstream.dl_session = Some(SecretString::from(session));
        self
    }

    /// Override the streamed-chunk pacing
    pub fn stream_interval(mut self, interval: &str) -> Self {
        self.config.chat.stream_interval = interval.to_owned();
        self
    }

    /// Launch the gateway
    ///
    /// The listener is bound here so the assigned port is known before the
    /// serve task starts accepting requests.
    pub async fn start(self) -> anyhow::Result<TestServer> {
        let router = Server::new(self.config)?.into_router();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let shutdown = CancellationToken::new();
        let signal = shutdown.clone();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { signal.cancelled().await })
                .await
                .ok();
        });

        Ok(TestServer {
            base_url,
            shutdown,
            client: reqwest::Client::new(),
        })
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
