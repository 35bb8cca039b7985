use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Builds an HTTP error with a sanitized, user-facing body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: sanitize_body(body),
        }
    }
}

/// Trims and truncates error bodies before they reach the UI.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_body_is_trimmed_and_capped() {
        let long = format!("  {}  ", "x".repeat(500));
        let AppError::Http { status, message } = AppError::http(502, &long) else {
            panic!("expected an HTTP error");
        };
        assert_eq!(status, 502);
        assert_eq!(message.len(), MAX_ERROR_CHARS);
    }

    #[test]
    fn empty_http_error_body_gets_placeholder() {
        assert_eq!(
            AppError::http(500, "   ").to_string(),
            "Request failed (500): Request failed."
        );
    }
}
