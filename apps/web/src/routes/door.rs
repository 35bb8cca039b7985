//! Door pages around sign-in: signup, password recovery, post-signup result,
//! the post-login prompt and the third-party provider callback. They render
//! without console chrome.

use crate::{app_lib::theme::Theme, components::Spinner};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_params_map, use_query_map},
};

#[component]
fn DoorCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=Theme::DOOR_CARD>
            <h1 class="mb-4 text-xl font-semibold text-slate-900">{title}</h1>
            <div class="space-y-4 text-sm text-slate-600">{children()}</div>
        </div>
    }
}

/// Application named in the route, shown under the card title.
fn application_name() -> impl Fn() -> Option<String> + Copy {
    let params = use_params_map();
    move || params.with(|map| map.get("application_name"))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let application = application_name();

    view! {
        <DoorCard title="Sign up">
            {move || application().map(|name| view! { <p>{format!("Application: {name}")}</p> })}
            <p>"Self-service registration is handled by the application's signup form."</p>
            <p>
                "Have an account? "
                <A href="/login" {..} class=Theme::LINK>
                    "Sign in"
                </A>
            </p>
        </DoorCard>
    }
}

#[component]
pub fn ForgetPage() -> impl IntoView {
    let application = application_name();

    view! {
        <DoorCard title="Retrieve password">
            {move || application().map(|name| view! { <p>{format!("Application: {name}")}</p> })}
            <p>"Password recovery sends a code to the email or phone on file."</p>
            <A href="/login" {..} class=Theme::LINK>
                "Back to sign in"
            </A>
        </DoorCard>
    }
}

#[component]
pub fn ResultPage() -> impl IntoView {
    let application = application_name();

    view! {
        <DoorCard title="Your account has been created">
            {move || application().map(|name| view! { <p>{format!("Application: {name}")}</p> })}
            <A href="/login" {..} class=Theme::LINK>
                "Sign in now"
            </A>
        </DoorCard>
    }
}

#[component]
pub fn PromptPage() -> impl IntoView {
    let application = application_name();

    view! {
        <DoorCard title="Complete your profile">
            {move || application().map(|name| view! { <p>{format!("Application: {name}")}</p> })}
            <p>"Your account is missing information the application requires."</p>
            <A href="/" {..} class=Theme::LINK>
                "Continue to the console"
            </A>
        </DoorCard>
    }
}

/// Landing page of third-party provider redirects. The provider code is never
/// displayed or logged.
#[component]
pub fn CallbackPage() -> impl IntoView {
    let query = use_query_map();
    let has_code = move || query.with(|map| map.get("code").is_some_and(|code| !code.is_empty()));

    view! {
        <DoorCard title="Signing in">
            <Show
                when=has_code
                fallback=|| {
                    view! {
                        <p>"The provider did not return an authorization code."</p>
                        <A href="/login" {..} class=Theme::LINK>
                            "Back to sign in"
                        </A>
                    }
                }
            >
                <Spinner label="Signing in" />
            </Show>
        </DoorCard>
    }
}
