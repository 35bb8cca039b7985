//! Session gate: resolves the signed-in account once per page load and decides,
//! per route, whether to render, wait, or redirect. The account response is the
//! only source of truth; guards here are UX only and the API still enforces
//! access on every call. URL credentials (`access_token`, `username`/`password`)
//! are forwarded once and never logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod context;
pub(crate) mod gate;
mod guards;
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use context::{use_session, SessionContext, SessionProvider};
#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RequireSignedIn, RequireSignedOut};
pub(crate) use guards::{require_signed_in, require_signed_out, GuardOutcome};
