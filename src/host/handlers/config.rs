use crate::host::ConsoleSettings;
use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

// axum handler for the console runtime configuration
pub async fn config_script(Extension(settings): Extension<Arc<ConsoleSettings>>) -> impl IntoResponse {
    let headers = [
        (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
        (header::CACHE_CONTROL, "no-store"),
    ];

    match settings.to_script() {
        Ok(script) => (StatusCode::OK, headers, script),
        Err(err) => {
            error!("Failed to render console settings: {err:#}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                headers,
                "window.WARDEN_CONFIG = null;\n".to_string(),
            )
        }
    }
}
