//! HTTP host for the compiled console.
//!
//! Every path that is not an asset or one of the host endpoints falls back to
//! `index.html`, so client-side routes such as `/organizations/acme` survive a
//! page reload.

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
    Extension, Router,
};
use std::{path::Path, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;

pub mod handlers;
mod settings;

pub use self::settings::ConsoleSettings;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

const REQUEST_ID: &str = "x-request-id";

/// Build the host router for a dist directory.
#[must_use]
pub fn router(dist: &Path, console: ConsoleSettings) -> Router {
    let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/config.js", get(handlers::config_script))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static(REQUEST_ID),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    REQUEST_ID,
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(Arc::new(console))),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to bind or serve
pub async fn new(port: u16, dist: impl AsRef<Path>, console: ConsoleSettings) -> Result<()> {
    let app = router(dist.as_ref(), console);

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Gracefully shutdown");
            }
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::{body::to_bytes, http::StatusCode};
    use std::fs;
    use tower::ServiceExt;

    fn dist() -> Result<tempfile::TempDir> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("index.html"),
            "<html><body>console</body></html>",
        )?;
        fs::write(dir.path().join("warden-web.js"), "export default 1;")?;
        Ok(dir)
    }

    async fn get(app: Router, uri: &str) -> Result<(StatusCode, String)> {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(body.to_vec())?))
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() -> Result<()> {
        let dir = dist()?;
        let app = router(dir.path(), ConsoleSettings::default());

        let (status, body) = get(app.clone(), "/organizations/acme/users").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console"));

        let (status, body) = get(app, "/login/oauth/authorize?client_id=abc").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console"));
        Ok(())
    }

    #[tokio::test]
    async fn assets_are_served_from_dist() -> Result<()> {
        let dir = dist()?;
        let app = router(dir.path(), ConsoleSettings::default());

        let (status, body) = get(app, "/warden-web.js").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
        Ok(())
    }

    #[tokio::test]
    async fn config_script_is_routed() -> Result<()> {
        let dir = dist()?;
        let console = ConsoleSettings {
            api_base_url: "https://id.example.com".to_string(),
            ..ConsoleSettings::default()
        };
        let app = router(dir.path(), console);

        let (status, body) = get(app, "/config.js").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("window.WARDEN_CONFIG = "));
        assert!(body.contains("https://id.example.com"));
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() -> Result<()> {
        let dir = dist()?;
        let app = router(dir.path(), ConsoleSettings::default());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;
        let generated = response
            .headers()
            .get(REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        assert!(generated.is_some_and(|id| Ulid::from_string(&id).is_ok()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID, "req-1")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(
            response.headers().get(REQUEST_ID),
            Some(&HeaderValue::from_static("req-1"))
        );
        Ok(())
    }
}
