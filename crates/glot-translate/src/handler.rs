//! Axum route handlers for the four translation dialects

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use futures_util::{Stream, StreamExt};
use http::{HeaderMap, StatusCode};

use crate::convert;
use crate::error::TranslateError;
use crate::protocol::deepl::{
    FlatPayload, OfficialEnvelope, OfficialForm, OfficialPayload, StatusEnvelope, TranslateEnvelope,
};
use crate::protocol::openai::{ChatCompletionRequest, ChatErrorEnvelope};
use crate::state::TranslateState;
use crate::stream::StreamEvent;
use crate::types::TranslationResult;

/// Build the dialect router with all translation endpoints
pub fn dialect_router(state: TranslateState) -> Router {
    Router::new()
        .route("/translate", routing::post(free_translate))
        .route("/v1/translate", routing::post(pro_translate))
        .route("/v2/translate", routing::post(official_translate))
        .route("/v1/chat/completions", routing::post(chat_completions))
        .with_state(state)
}

// -- Free dialect --

/// Handle `POST /translate`
async fn free_translate(
    State(state): State<TranslateState>,
    payload: Result<Json<FlatPayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return deepl_error_response(&TranslateError::InvalidPayload);
    };

    let request = match convert::deepl::from_flat_payload(&payload) {
        Ok(request) => request,
        Err(e) => return deepl_error_response(&e),
    };

    match state.translate(&request).await {
        Ok(result) => deepl_result_response(result),
        Err(e) => deepl_error_response(&e),
    }
}

// -- Pro dialect --

/// Handle `POST /v1/translate`
async fn pro_translate(
    State(state): State<TranslateState>,
    headers: HeaderMap,
    payload: Result<Json<FlatPayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return deepl_error_response(&TranslateError::InvalidPayload);
    };

    let cookie = headers.get(http::header::COOKIE).and_then(|value| value.to_str().ok());

    let request = match convert::deepl::from_pro_payload(&payload, cookie, state.default_session()) {
        Ok(request) => request,
        Err(e) => return deepl_error_response(&e),
    };

    match state.translate(&request).await {
        Ok(result) => deepl_result_response(result),
        Err(e) => deepl_error_response(&e),
    }
}

// -- Official-style v2 dialect --

/// Handle `POST /v2/translate`, accepting form-encoded and JSON bodies
async fn official_translate(State(state): State<TranslateState>, headers: HeaderMap, body: Bytes) -> Response {
    let payload = match official_payload(&headers, &body) {
        Ok(payload) => payload,
        Err(e) => return deepl_error_response(&e),
    };

    let request = match convert::deepl::from_official_payload(&payload) {
        Ok(request) => request,
        Err(e) => return deepl_error_response(&e),
    };

    match state.translate(&request).await {
        Ok(result) => official_result_response(result),
        Err(e) => deepl_error_response(&e),
    }
}

/// Decode the v2 body, form fields first with a JSON fallback
fn official_payload(headers: &HeaderMap, body: &[u8]) -> Result<OfficialPayload, TranslateError> {
    if is_form_encoded(headers)
        && let Ok(form) = serde_urlencoded::from_bytes::<OfficialForm>(body)
        && !form.text.is_empty()
        && !form.target_lang.is_empty()
    {
        return Ok(OfficialPayload {
            text: vec![form.text],
            target_lang: form.target_lang,
        });
    }

    serde_json::from_slice(body).map_err(|_| TranslateError::InvalidPayload)
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

// -- Chat completions dialect --

/// Handle `POST /v1/chat/completions`
async fn chat_completions(
    State(state): State<TranslateState>,
    payload: Result<Json<ChatCompletionRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(wire_request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatErrorEnvelope {
                error: "Invalid request format".to_owned(),
            }),
        )
            .into_response();
    };

    let is_stream = wire_request.stream.unwrap_or(false);

    let request = match convert::openai::from_chat_request(&wire_request) {
        Ok(request) => request,
        Err(e) => return chat_error_response(&e),
    };

    let result = match state.translate(&request).await {
        Ok(result) => result,
        Err(e) => return chat_error_response(&e),
    };

    if !result.is_ok() {
        return (
            result.status(),
            Json(ChatErrorEnvelope { error: result.message }),
        )
            .into_response();
    }

    if is_stream {
        let stream = crate::stream::emulate(&result.data, &wire_request.model, state.stream_pace());
        chat_stream_response(stream).into_response()
    } else {
        let response = convert::openai::completion_response(&wire_request.model, &request.text, &result.data);
        Json(response).into_response()
    }
}

/// Frame emulated chunks as SSE data lines terminated by `[DONE]`
fn chat_stream_response(
    stream: impl Stream<Item = StreamEvent> + Send + 'static,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let event_stream = stream.map(|event| match event {
        StreamEvent::Chunk(chunk) => {
            let data = serde_json::to_string(&chunk).unwrap_or_default();
            Ok(Event::default().data(data))
        }
        StreamEvent::Done => Ok(Event::default().data("[DONE]")),
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

// -- Response builders --

/// Render an engine verdict in the free and pro dialect shape
fn deepl_result_response(result: TranslationResult) -> Response {
    if result.is_ok() {
        Json(TranslateEnvelope::from(result)).into_response()
    } else {
        let status = result.status();
        (status, Json(StatusEnvelope::new(result.code, result.message))).into_response()
    }
}

/// Render an engine verdict in the v2 dialect shape
fn official_result_response(result: TranslationResult) -> Response {
    if result.is_ok() {
        Json(OfficialEnvelope::from(result)).into_response()
    } else {
        let status = result.status();
        (status, Json(StatusEnvelope::new(result.code, result.message))).into_response()
    }
}

/// Render a gateway error in the free, pro, and v2 dialect shape
fn deepl_error_response(error: &TranslateError) -> Response {
    let status = error.status_code();
    (status, Json(StatusEnvelope::new(status.as_u16(), error.to_string()))).into_response()
}

/// Render a gateway error in the chat dialect shape
fn chat_error_response(error: &TranslateError) -> Response {
    (
        error.status_code(),
        Json(ChatErrorEnvelope {
            error: error.to_string(),
        }),
    )
        .into_response()
}
