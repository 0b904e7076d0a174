//! Mock translation engine for integration tests
//!
//! Implements the engine's flat JSON endpoint, captures what the gateway
//! sends, and returns canned verdicts.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Default canned translation
const DEFAULT_TRANSLATION: &str = "Bonjour le monde";

/// What the engine should send back
enum EngineMode {
    /// Success verdict carrying the configured translation
    Success,
    /// Fixed failure verdict mirrored into body and HTTP status
    Verdict { code: u16, message: String },
    /// Body that is not JSON at all
    Garbage,
}

/// One captured call from the gateway
#[derive(Debug, Clone)]
pub struct EngineCall {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tag_handling: String,
    /// Value of the `dl_session` cookie, when sent
    pub session: Option<String>,
}

/// Mock engine that records requests and returns predictable verdicts
pub struct MockEngine {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockEngineState>,
}

struct MockEngineState {
    hits: AtomicU32,
    last_call: Mutex<Option<EngineCall>>,
    mode: EngineMode,
    translation: String,
}

impl MockEngine {
    /// Start an engine that succeeds with the default translation
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(EngineMode::Success, DEFAULT_TRANSLATION).await
    }

    /// Start an engine that succeeds with a custom translation
    pub async fn start_with_translation(translation: &str) -> anyhow::Result<Self> {
        Self::start_inner(EngineMode::Success, translation).await
    }

    /// Start an engine that answers every call with a failure verdict
    pub async fn start_with_verdict(code: u16, message: &str) -> anyhow::Result<Self> {
        Self::start_inner(
            EngineMode::Verdict {
                code,
                message: message.to_owned(),
            },
            DEFAULT_TRANSLATION,
        )
        .await
    }

    /// Start an engine that answers with an unparseable body
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(EngineMode::Garbage, DEFAULT_TRANSLATION).await
    }

    async fn start_inner(mode: EngineMode, translation: &str) -> anyhow::Result<Self> {
        let state = Arc::new(MockEngineState {
            hits: AtomicU32::new(0),
            last_call: Mutex::new(None),
            mode,
            translation: translation.to_owned(),
        });

        let app = Router::new()
            .route("/translate", routing::post(handle_translate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Endpoint URL for configuring the gateway
    pub fn url(&self) -> String {
        format!("http://{}/translate", self.addr)
    }

    /// Number of calls received
    pub fn hits(&self) -> u32 {
        self.state.hits.load(Ordering::Relaxed)
    }

    /// The most recent captured call
    pub fn last_call(&self) -> Option<EngineCall> {
        self.state.last_call.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Drop for MockEngine {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Wire types matching the engine contract --

#[derive(Debug, Deserialize)]
struct EnginePayload {
    #[serde(default)]
    text: String,
    #[serde(default)]
    source_lang: String,
    #[serde(default)]
    target_lang: String,
    #[serde(default)]
    tag_handling: String,
}

#[derive(Debug, Serialize)]
struct EngineVerdict {
    code: u16,
    id: i64,
    message: String,
    data: String,
    alternatives: Vec<String>,
    source_lang: String,
    target_lang: String,
    method: String,
}

// -- Handler --

async fn handle_translate(
    State(state): State<Arc<MockEngineState>>,
    headers: HeaderMap,
    Json(payload): Json<EnginePayload>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::Relaxed);

    let session = headers
        .get(http::header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookie| cookie.strip_prefix("dl_session="))
        .map(str::to_owned);

    let call = EngineCall {
        text: payload.text.clone(),
        source_lang: payload.source_lang.clone(),
        target_lang: payload.target_lang.clone(),
        tag_handling: payload.tag_handling.clone(),
        session: session.clone(),
    };
    if let Ok(mut guard) = state.last_call.lock() {
        *guard = Some(call);
    }

    match &state.mode {
        EngineMode::Success => {
            let detected = if payload.source_lang.is_empty() {
                "EN".to_owned()
            } else {
                payload.source_lang
            };
            let method = if session.is_some() { "Pro" } else { "Free" };

            let verdict = EngineVerdict {
                code: 200,
                id: 1_234_567_890,
                message: String::new(),
                data: state.translation.clone(),
                alternatives: vec!["Salut le monde".to_owned()],
                source_lang: detected,
                target_lang: payload.target_lang,
                method: method.to_owned(),
            };
            Json(verdict).into_response()
        }
        EngineMode::Verdict { code, message } => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(serde_json::json!({
                    "code": code,
                    "message": message,
                })),
            )
                .into_response()
        }
        EngineMode::Garbage => (StatusCode::OK, "definitely not json").into_response(),
    }
}
