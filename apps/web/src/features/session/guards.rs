use crate::features::session::state::Session;

/// What a guarded route does for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
    /// The account fetch has not answered yet; render nothing.
    Wait,
}

pub fn require_signed_in(session: &Session) -> GuardOutcome {
    match session {
        Session::Authenticated(_) => GuardOutcome::Render,
        Session::Anonymous => GuardOutcome::Redirect("/login"),
        Session::Unknown => GuardOutcome::Wait,
    }
}

pub fn require_signed_out(session: &Session) -> GuardOutcome {
    match session {
        Session::Authenticated(_) => GuardOutcome::Redirect("/"),
        Session::Anonymous | Session::Unknown => GuardOutcome::Render,
    }
}

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{require_signed_in, require_signed_out, GuardOutcome};
    use crate::features::session::{context::use_session, state::Session};
    use leptos::prelude::*;
    use leptos_router::components::Redirect;

    fn guarded(
        decide: fn(&Session) -> GuardOutcome,
        children: ChildrenFn,
    ) -> impl IntoView {
        let session = use_session();
        move || match session.with(decide) {
            GuardOutcome::Render => children().into_any(),
            // UX-only guard; the API enforces access on every call.
            GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            GuardOutcome::Wait => ().into_any(),
        }
    }

    #[component]
    pub fn RequireSignedIn(children: ChildrenFn) -> impl IntoView {
        guarded(require_signed_in, children)
    }

    #[component]
    pub fn RequireSignedOut(children: ChildrenFn) -> impl IntoView {
        guarded(require_signed_out, children)
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use view::{RequireSignedIn, RequireSignedOut};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::types::Account;

    #[test]
    fn signed_in_guard_waits_then_redirects_or_renders() {
        assert_eq!(require_signed_in(&Session::Unknown), GuardOutcome::Wait);
        assert_eq!(
            require_signed_in(&Session::Anonymous),
            GuardOutcome::Redirect("/login")
        );
        assert_eq!(
            require_signed_in(&Session::Authenticated(Account::default())),
            GuardOutcome::Render
        );
    }

    #[test]
    fn signed_out_guard_only_redirects_authenticated() {
        assert_eq!(require_signed_out(&Session::Unknown), GuardOutcome::Render);
        assert_eq!(require_signed_out(&Session::Anonymous), GuardOutcome::Render);
        assert_eq!(
            require_signed_out(&Session::Authenticated(Account::default())),
            GuardOutcome::Redirect("/")
        );
    }
}
