mod auth;
mod cors;
mod routes;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use glot_config::Config;
use glot_translate::TranslateState;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the translation state cannot be constructed
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 1188)));

        let state = TranslateState::from_config(&config)?;

        // Token auth guards the dialect routes only. The banner and the
        // catch-all stay open.
        let mut dialects = glot_translate::dialect_router(state);
        if let Some(token) = config.auth.access_token() {
            let token = token.clone();
            dialects = dialects.layer(axum::middleware::from_fn(move |req, next| {
                let token = token.clone();
                async move { auth::token_middleware(token, req, next).await }
            }));
        }

        let app = Router::new()
            .route("/", get(routes::banner))
            .merge(dialects)
            .fallback(routes::not_found)
            .layer(TraceLayer::new_for_http())
            .layer(cors::cors_layer(&config.server.cors));

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
