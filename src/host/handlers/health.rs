use crate::host::GIT_COMMIT_HASH;
use axum::{
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::{debug, error};

#[derive(Serialize, Debug)]
pub struct Health {
    name: String,
    version: String,
    build: String,
}

// axum handler for health
pub async fn health() -> impl IntoResponse {
    let health = Health {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        build: GIT_COMMIT_HASH.to_string(),
    };

    let short_hash = if health.build.len() > 7 {
        &health.build[0..7]
    } else {
        ""
    };

    let headers = format!("{}:{}:{}", health.name, health.version, short_hash)
        .parse::<HeaderValue>()
        .map(|x_app_header_value| {
            debug!("X-App header: {:?}", x_app_header_value);

            let mut headers = HeaderMap::new();

            headers.insert("X-App", x_app_header_value);

            headers
        })
        .map_err(|err| {
            error!("Failed to parse X-App header: {}", err);
        });

    // Empty headers if the value could not be built
    let headers = headers.unwrap_or_else(|()| HeaderMap::new());

    (headers, Json(health))
}
