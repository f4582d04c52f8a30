//! Forwarding of `/api/*` requests to the geometry service.
//!
//! The browser talks only to this server. Every `/api/...` request is replayed
//! against `SNOWAPP_BACKEND_URL` with the same method, path, query, body and
//! end-to-end headers, and the upstream response is handed back unchanged.
//! Only transport failures are translated: a timeout becomes 504 and anything
//! else 502, each with a `{"message": ...}` body the client can display.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ServerConfig;

/// Headers that describe a single hop and must not be replayed.
const HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The geometry service could not be reached or did not answer in time.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

pub(crate) fn proxy_error_to_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        ProxyError::Upstream(_) | ProxyError::ClientBuild(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = proxy_error_to_status(&self);
        tracing::warn!(error = %self, %status, "api forward failed");
        let message = if status == StatusCode::GATEWAY_TIMEOUT {
            "Geometry service timed out"
        } else {
            "Geometry service unavailable"
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// Shared state for the forwarding handler.
#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_url: Arc<str>,
}

impl ProxyState {
    /// Build the outbound client with the configured timeouts.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

/// Whether a header should cross the proxy in either direction.
pub(crate) fn is_forwardable_header(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(name) && name.as_str() != "keep-alive"
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if is_forwardable_header(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Upstream URL for an incoming request URI: the backend base plus the
/// incoming path and query, untouched.
pub(crate) fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(state.backend_url(), &uri);
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, %status, bytes = bytes.len(), "api forwarded");

    Ok((status, response_headers, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
