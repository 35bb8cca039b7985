//! HTTP helpers for the identity API with consistent timeouts and error
//! handling. Every call includes credentials because the API tracks the signed-in
//! account with a session cookie. The API answers with a tagged
//! `{status, msg, data}` body even for rejected operations, so callers inspect
//! the status themselves; only transport and decoding failures become `AppError`.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use web_sys::{AbortController, AbortSignal, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON with cookies for session-authenticated APIs.
pub async fn get_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_credentials(Request::get(&url), signal)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts a JSON body with cookies and parses the JSON response.
pub async fn post_json_with_credentials<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_credentials(Request::post(&url), signal)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an urlencoded form with cookies and parses the JSON response.
pub async fn post_form_with_credentials<T: DeserializeOwned>(
    path: &str,
    form: String,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        with_credentials(Request::post(&url), signal)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with cookies, used to clear a session.
pub async fn post_empty_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        with_credentials(Request::post(&url), signal)
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

fn with_credentials(builder: RequestBuilder, signal: &AbortSignal) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(signal))
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    AppConfig::load().endpoint(path)
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::http(status, &body))
    }
}
