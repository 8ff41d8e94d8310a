//! Reverse proxy from `/api/*` to the QA backend.
//!
//! The browser only ever talks to this origin. Requests are forwarded with
//! their method, path, query, body and the auth/content headers; responses
//! are relayed without interpretation, including 401s, which the client
//! handles itself.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Largest request body accepted, sized for Excel uploads.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "proxy failure");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": "backend unavailable" }))).into_response()
    }
}

/// Join the configured backend base with the incoming path and query.
pub fn backend_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// `ANY /api/{*rest}` — forward to the backend and relay its answer.
///
/// # Errors
///
/// Returns [`ProxyError`] (rendered as 502) when the backend cannot be
/// reached or its body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let target = backend_url(&state.backend_url, path_and_query);

    let mut request = state.http.request(method.clone(), &target);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    tracing::debug!(%method, path = %uri.path(), status = %upstream.status(), "proxied");
    relay(upstream).await
}

async fn relay(upstream: reqwest::Response) -> Result<Response, ProxyError> {
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
