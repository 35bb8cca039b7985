//! Login door page. Password sign-in posts the credentials to the login
//! endpoint; "Sign in with code" opens the two-factor dialog for the entered
//! email or phone. Both forward an OAuth authorization in progress, so the page
//! also serves `/login/oauth/authorize`. Passwords and codes never leave the
//! request bodies.

use crate::{
    app_lib::{browser, config::AppConfig, theme::Theme},
    components::{Alert, Button, Spinner, VerifyModal},
    features::{
        notify::{queue::NoticeKind, use_notices},
        session::types::ApiResponse,
        verify::{
            client,
            dialog::VerifyDialog,
            oauth::OAuthParams,
            request::{PasswordLogin, VerificationRequest},
        },
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[derive(Clone)]
struct LoginInput {
    organization: String,
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = AppConfig::load();
    let notices = use_notices();
    let oauth = OAuthParams::from_location();
    let client_id = oauth.as_ref().map(|params| params.client_id.clone());

    let (organization, set_organization) = signal(config.organization_name.clone());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (destination, set_destination) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let dialog = RwSignal::new(None::<VerifyDialog>);

    let application = config.app_name.clone();
    let login_action = Action::new_local(move |input: &LoginInput| {
        let body = PasswordLogin::new(
            &application,
            &input.organization,
            &input.username,
            &input.password,
        );
        let oauth = oauth.clone();
        async move {
            let result = client::login(&body, oauth.as_ref()).await;
            (result, oauth)
        }
    });

    Effect::new(move |_| {
        if let Some((result, oauth)) = login_action.value().get() {
            match result {
                Ok(response) if response.is_ok() => {
                    notices.success("Logged in successfully");
                    finish_login(&response, oauth.as_ref());
                }
                Ok(response) => set_error.set(Some(format!("Failed to log in: {}", response.msg))),
                Err(err) => set_error.set(Some(format!("Failed to log in: {err}"))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let input = LoginInput {
            organization: organization.get_untracked().trim().to_string(),
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if input.organization.is_empty() || input.username.is_empty() || input.password.is_empty() {
            set_error.set(Some(
                "Organization, username and password are required.".to_string(),
            ));
            return;
        }

        login_action.dispatch(input);
    };

    let on_code = Callback::new(move |()| {
        set_error.set(None);
        let organization = organization.get_untracked().trim().to_string();
        let username = username.get_untracked().trim().to_string();
        let destination = destination.get_untracked().trim().to_string();
        if organization.is_empty() || username.is_empty() || destination.is_empty() {
            set_error.set(Some(
                "Organization, username and an email or phone are required.".to_string(),
            ));
            return;
        }

        dialog.set(Some(VerifyDialog::open(VerificationRequest::for_login(
            &organization,
            &username,
            &destination,
        ))));
    });

    view! {
        <div class=Theme::DOOR_CARD>
            <h1 class="mb-2 text-xl font-semibold text-slate-900">"Sign in"</h1>
            {client_id
                .map(|client_id| {
                    view! {
                        <p class="mb-4 text-sm text-slate-500">
                            {format!("Continue to application {client_id}")}
                        </p>
                    }
                })}
            <form class="space-y-5" on:submit=on_submit>
                <div>
                    <label class=Theme::LABEL for="organization">
                        "Organization"
                    </label>
                    <input
                        id="organization"
                        class=Theme::INPUT
                        prop:value=organization
                        on:input=move |event| set_organization.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        class=Theme::INPUT
                        autocomplete="username"
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                {move || login_action.pending().get().then(|| view! { <Spinner /> })}
                <div class="border-t border-slate-200 pt-5">
                    <label class=Theme::LABEL for="destination">
                        "Email or phone"
                    </label>
                    <div class="flex gap-3">
                        <input
                            id="destination"
                            class=Theme::INPUT
                            autocomplete="email"
                            on:input=move |event| set_destination.set(event_target_value(&event))
                        />
                        <Button secondary=true on_click=on_code>
                            "Sign in with code"
                        </Button>
                    </div>
                </div>
                {move || {
                    error.get().map(|message| view! { <Alert kind=NoticeKind::Error message=message /> })
                }}
            </form>
            <VerifyModal dialog=dialog />
        </div>
    }
}

/// After a successful password login: hand the authorization code back to the
/// OAuth client, or reload so the session gate picks up the new cookie.
fn finish_login(response: &ApiResponse, oauth: Option<&OAuthParams>) {
    let redirect = oauth.and_then(|params| {
        response
            .data
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .and_then(|code| params.redirect_with_code(code))
    });
    match redirect {
        Some(href) => browser::assign(&href),
        None => browser::reload(),
    }
}
