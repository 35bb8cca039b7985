//! Client-side route table. Guards wrap each page: `RequireSignedIn` waits for
//! the account fetch and sends anonymous visitors to `/login`, `RequireSignedOut`
//! sends signed-in accounts home. Paths without a guard stay reachable in both
//! states (OAuth authorize, callback, public user profiles).

mod account;
mod door;
mod home;
mod login;
mod not_found;
mod resources;

pub(crate) use account::AccountPage;
pub(crate) use door::{CallbackPage, ForgetPage, PromptPage, ResultPage, SignupPage};
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use resources::ResourcePage;

use crate::features::session::{RequireSignedIn, RequireSignedOut};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| signed_in(HomePage) />
            <Route path=path!("/account") view=|| signed_in(AccountPage) />
            <Route
                path=path!("/organizations")
                view=|| signed_in(|| view! { <ResourcePage title="Organizations" /> })
            />
            <Route
                path=path!("/organizations/:organization_name")
                view=|| {
                    signed_in(|| view! { <ResourcePage title="Organization" params=&["organization_name"] /> })
                }
            />
            <Route
                path=path!("/organizations/:organization_name/users")
                view=|| {
                    signed_in(|| view! { <ResourcePage title="Organization users" params=&["organization_name"] /> })
                }
            />
            <Route path=path!("/users") view=|| signed_in(|| view! { <ResourcePage title="Users" /> }) />
            <Route
                path=path!("/users/:organization_name/:user_name")
                view=|| view! { <ResourcePage title="User" params=&["organization_name", "user_name"] /> }
            />
            <Route path=path!("/providers") view=|| signed_in(|| view! { <ResourcePage title="Providers" /> }) />
            <Route
                path=path!("/providers/:provider_name")
                view=|| signed_in(|| view! { <ResourcePage title="Provider" params=&["provider_name"] /> })
            />
            <Route
                path=path!("/applications")
                view=|| signed_in(|| view! { <ResourcePage title="Applications" /> })
            />
            <Route
                path=path!("/applications/:application_name")
                view=|| {
                    signed_in(|| view! { <ResourcePage title="Application" params=&["application_name"] /> })
                }
            />
            <Route path=path!("/ldaps") view=|| signed_in(|| view! { <ResourcePage title="LDAPs" /> }) />
            <Route
                path=path!("/ldap/:ldap_id")
                view=|| signed_in(|| view! { <ResourcePage title="LDAP" params=&["ldap_id"] /> })
            />
            <Route
                path=path!("/ldap/sync/:ldap_id")
                view=|| signed_in(|| view! { <ResourcePage title="LDAP sync" params=&["ldap_id"] /> })
            />
            <Route path=path!("/tokens") view=|| signed_in(|| view! { <ResourcePage title="Tokens" /> }) />
            <Route
                path=path!("/tokens/:token_name")
                view=|| signed_in(|| view! { <ResourcePage title="Token" params=&["token_name"] /> })
            />
            <Route path=path!("/records") view=|| signed_in(|| view! { <ResourcePage title="Records" /> }) />
            <Route path=path!("/result") view=|| signed_out(ResultPage) />
            <Route path=path!("/result/:application_name") view=|| signed_out(ResultPage) />
            <Route path=path!("/signup") view=|| signed_out(SignupPage) />
            <Route path=path!("/signup/:application_name") view=|| signed_out(SignupPage) />
            <Route path=path!("/login") view=|| signed_out(LoginPage) />
            <Route path=path!("/login/oauth/authorize") view=LoginPage />
            <Route path=path!("/signup/oauth/authorize") view=LoginPage />
            <Route path=path!("/callback") view=CallbackPage />
            <Route path=path!("/forget") view=|| signed_out(ForgetPage) />
            <Route path=path!("/forget/:application_name") view=|| signed_out(ForgetPage) />
            <Route path=path!("/prompt") view=|| signed_in(PromptPage) />
            <Route path=path!("/prompt/:application_name") view=|| signed_in(PromptPage) />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

fn signed_in<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! { <RequireSignedIn>{page()}</RequireSignedIn> }
}

fn signed_out<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! { <RequireSignedOut>{page()}</RequireSignedOut> }
}
