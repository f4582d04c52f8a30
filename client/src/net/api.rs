//! REST helpers for the geometry service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`], since these
//! requests are only ever issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The page turns an error into a
//! banner line with [`ApiError::banner_message`]; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GreetingResponse, Point, RectEdge, Rectangle, SnowSector};

pub const GREETING_ENDPOINT: &str = "/api/greeting/";
pub const CORNERS_ENDPOINT: &str = "/api/rectangles/";
pub const SECTORS_ENDPOINT: &str = "/api/snowsectors/";
pub const PATH_ENDPOINT: &str = "/api/tsp0/";

pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error occurred";

/// Failure of a geometry service request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but could not be decoded, or the request body
    /// could not be encoded.
    #[error("malformed payload: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Text shown to the user after `ERROR: `.
    pub fn banner_message(&self) -> String {
        match self {
            Self::Status { status: 500, .. } => SERVER_ERROR_MESSAGE.to_owned(),
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Status { message: None, .. } | Self::Network(_) => GENERIC_ERROR_MESSAGE.to_owned(),
            Self::Decode(_) | Self::Unavailable => UNEXPECTED_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Pull the `message` field out of an error response body, if there is one.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let message = match resp.text().await {
            Ok(body) => error_message_from_body(&body),
            Err(_) => None,
        };
        return Err(ApiError::Status { status, message });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_rectangles<T: serde::de::DeserializeOwned>(
    endpoint: &str,
    rectangles: &[Rectangle],
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(rectangles)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

/// Fetch the greeting from `GET /api/greeting/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_greeting() -> Result<GreetingResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(GREETING_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Compute one corner set per rectangle via `POST /api/rectangles/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn calculate_corners(rectangles: &[Rectangle]) -> Result<Vec<RectEdge>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_rectangles(CORNERS_ENDPOINT, rectangles).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rectangles;
        Err(ApiError::Unavailable)
    }
}

/// Compute snow sectors for the rectangles via `POST /api/snowsectors/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn calculate_sectors(rectangles: &[Rectangle]) -> Result<Vec<SnowSector>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_rectangles(SECTORS_ENDPOINT, rectangles).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rectangles;
        Err(ApiError::Unavailable)
    }
}

/// Compute a traversal path over the sectors via `POST /api/tsp0/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn calculate_path(rectangles: &[Rectangle]) -> Result<Vec<Point>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_rectangles(PATH_ENDPOINT, rectangles).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rectangles;
        Err(ApiError::Unavailable)
    }
}
