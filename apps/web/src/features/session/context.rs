//! Session context for the console. The provider runs the account fetch once on
//! mount and is the only writer of the `Session` signal; logout and account
//! updates go through the same `set`.

use crate::{
    app_lib::config::AppConfig,
    features::{
        notify::{use_notices, NoticeContext},
        session::{
            client,
            gate::{account_query, logout_result, url_without_query, AccountQuery, Resolution},
            state::{Branding, Session},
            types::Account,
        },
    },
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::NavigateOptions;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlLinkElement;

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    notices: NoticeContext,
}

impl SessionContext {
    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.session.with(f)
    }

    pub fn set(&self, session: Session) {
        self.session.set(session);
    }

    /// Replaces the signed-in account after a page edits it.
    pub fn update_account(&self, account: Account) {
        self.set(Session::Authenticated(account));
    }

    /// Clears the server session. The local state only changes when the API
    /// confirms, then the console goes home.
    pub fn logout(self, navigate: impl Fn(&str, NavigateOptions) + 'static) {
        spawn_local(async move {
            match logout_result(client::logout().await) {
                Ok(message) => {
                    self.set(Session::Anonymous);
                    self.notices.success(message);
                    navigate("/", NavigateOptions::default());
                }
                Err(message) => self.notices.error(message),
            }
        });
    }
}

/// Provides the session context and resolves the account once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext {
        session: RwSignal::new(Session::Unknown),
        notices: use_notices(),
    };
    provide_context(session);

    let query = take_account_query();
    spawn_local(async move {
        let resolution = Resolution::resolve(client::get_account(query.as_ref()).await);
        if let Some(message) = resolution.error {
            session.notices.error(message);
        }
        session.set(resolution.session);
    });

    let default_favicon = AppConfig::load().default_favicon;
    Effect::new(move |_| {
        let branding = session.with(|current| Branding::for_session(current, &default_favicon));
        apply_branding(&branding);
    });

    view! { {children()} }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext {
        session: RwSignal::new(Session::Unknown),
        notices: use_notices(),
    })
}

/// Reads credentials from the page URL and strips the query from the address
/// bar before anything else can observe it.
fn take_account_query() -> Option<AccountQuery> {
    let window = web_sys::window()?;
    let location = window.location();
    let query = account_query(&location.search().ok()?)?;

    let stripped = location
        .href()
        .ok()
        .and_then(|href| url_without_query(&href));
    if let (Some(url), Ok(history)) = (stripped, window.history()) {
        if history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .is_err()
        {
            tracing::warn!("failed to strip credentials from the address bar");
        }
    }

    Some(query)
}

fn apply_branding(branding: &Branding) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if let Some(title) = &branding.title {
        document.set_title(title);
    }

    let existing = document
        .query_selector("link[rel~='icon']")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlLinkElement>().ok());
    let link = match existing {
        Some(link) => link,
        None => {
            let Some(link) = document
                .create_element("link")
                .ok()
                .and_then(|element| element.dyn_into::<HtmlLinkElement>().ok())
            else {
                return;
            };
            link.set_rel("icon");
            if let Some(head) = document.head() {
                if head.append_child(&link).is_err() {
                    return;
                }
            }
            link
        }
    };
    link.set_href(&branding.favicon);
}
