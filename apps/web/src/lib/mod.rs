//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Identity API conventions
//!
//! The identity API lives under `/api` and answers every call with a tagged
//! body:
//!
//! ```json
//! {"status": "ok" | "error", "msg": "...", "data": ..., "data2": ...}
//! ```
//!
//! A rejected operation (wrong code, expired session) is still an HTTP 200 with
//! `status != "ok"` and a human-readable `msg`. Feature clients return the
//! tagged body and leave the status check to the caller; `AppError` is reserved
//! for failures to reach or decode the API.
//!
//! Session state is carried by an `HttpOnly` cookie, so every helper sends
//! credentials. Callers must still avoid logging passwords, codes or tokens.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod browser;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_json_with_credentials, post_empty_with_credentials, post_form_with_credentials,
    post_json_with_credentials,
};
pub(crate) use errors::AppError;
