use axum::Json;
use axum::extract::{Query, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use glot_translate::protocol::deepl::StatusEnvelope;
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Require the configured access token on dialect routes
///
/// The credential may arrive as a `token` query parameter or in the
/// `Authorization` header, either bare or behind a `Bearer` /
/// `DeepL-Auth-Key` scheme. A request is authorized when either channel
/// matches the configured token.
pub async fn token_middleware(token: SecretString, request: Request, next: Next) -> Response {
    let expected = token.expose_secret();

    let header_token = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_header);

    let query_token = Query::<TokenQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|query| query.0.token);

    let authorized =
        header_token.is_some_and(|t| t == expected) || query_token.as_deref().is_some_and(|t| t == expected);

    if authorized {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(StatusEnvelope::new(401, "Invalid access token")),
        )
            .into_response()
    }
}

/// Extract the token from an Authorization header value
///
/// Accepts a bare token or a recognized scheme followed by the token.
/// Any other shape is treated as if the header were absent.
fn token_from_header(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(token), None, None) => Some(token),
        (Some(scheme), Some(token), None) if scheme == "Bearer" || scheme == "DeepL-Auth-Key" => Some(token),
        _ => None,
    }
}
