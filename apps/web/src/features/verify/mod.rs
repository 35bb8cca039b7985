//! Two-factor verification: the dialog that collects a one-time code sent to an
//! email or phone and completes the login with it. Codes, passwords and OAuth
//! state are secrets and are never logged.
//!
//! Flow Overview: the login page opens the dialog with the destination and the
//! user id. "Send Code" posts the destination to the send-code endpoint and
//! starts a cool-down. "Verify" posts the two-factor form to the login endpoint
//! (forwarding any OAuth authorization in progress); `ok` reloads the console so
//! the session gate picks up the new cookie, anything else keeps the dialog open.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod countdown;
pub(crate) mod dialog;
pub(crate) mod mask;
pub(crate) mod oauth;
pub(crate) mod request;
