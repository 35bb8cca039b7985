// Pure session, navigation and verification logic also builds natively so it
// can be unit tested; only the views need the browser.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    // `tracing` events reach the browser console through the `log` bridge.
    if console_log::init_with_level(log::Level::Info).is_ok() {
        tracing::info!(build = app_lib::build_info::short_commit_hash(), "starting console");
    }
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
