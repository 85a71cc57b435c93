//! REST helpers for the prediction API.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Host builds:
//! stubs returning [`ApiError::Transport`], since the endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a typed [`ApiError`] handed back to the caller;
//! nothing is swallowed. The page container stores the error and the
//! results panel renders it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{ComparisonResponse, PredictionRequest, PredictionResult};

use crate::config::ApiConfig;

/// Failure of a prediction API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "csr"))]
fn predict_endpoint(base_url: &str) -> String {
    format!("{base_url}/predict")
}

#[cfg(any(test, feature = "csr"))]
fn compare_endpoint(base_url: &str) -> String {
    format!("{base_url}/compare")
}

/// Build a [`ApiError::Status`], pulling the server's `{"detail": ...}`
/// message out of the body when there is one.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .unwrap_or_else(|| "request failed".to_owned());
    ApiError::Status { status, detail }
}

/// Run the survey through one model via `POST /predict`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-success status, or a
/// malformed response body.
pub async fn predict(
    config: &ApiConfig,
    request: &PredictionRequest,
) -> Result<PredictionResult, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(&predict_endpoint(&config.base_url), request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(not_in_browser())
    }
}

/// Run the survey through the whole model/ε grid via `POST /compare`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-success status, or a
/// malformed response body.
pub async fn compare(
    config: &ApiConfig,
    request: &PredictionRequest,
) -> Result<ComparisonResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(&compare_endpoint(&config.base_url), request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(not_in_browser())
    }
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    request: &PredictionRequest,
) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::post(url)
        .json(request)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(response.status(), &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
