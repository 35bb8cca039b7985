//! Host for the warden identity console.
//!
//! The console itself is a client-side application (`apps/web`). This crate
//! serves its compiled assets, publishes the runtime configuration the console
//! reads on startup, and reports health for load balancers.

pub mod cli;
pub mod host;
