//! Thin wrappers over `window` calls the console needs outside of the router.

/// Full page reload, so the session gate runs again with the new cookie.
pub fn reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().reload().is_err() {
        tracing::warn!("page reload failed");
    }
}

/// Leaves the single-page app for a server-rendered page.
pub fn assign(href: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().assign(href).is_err() {
            tracing::warn!(href, "navigation failed");
        }
    }
}

/// Goes back one entry in the browser history.
pub fn back() {
    if let Some(Ok(history)) = web_sys::window().map(|window| window.history()) {
        if history.back().is_err() {
            tracing::warn!("history back failed");
        }
    }
}
