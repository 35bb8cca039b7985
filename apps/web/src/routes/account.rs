//! Read-only view of the signed-in account. "Refresh" reloads the account from
//! the API and replaces it in the session.

use crate::{
    components::{Button, Spinner},
    features::{
        notify::use_notices,
        session::{client, gate::Resolution, state::Session, use_session},
    },
};
use leptos::prelude::*;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let refresh = Action::new_local(move |_: &()| async move {
        let resolution = Resolution::resolve(client::get_account(None).await);
        match resolution.session {
            Session::Authenticated(account) => {
                session.update_account(account);
                notices.info("Account refreshed");
            }
            _ => notices.error(
                resolution
                    .error
                    .unwrap_or_else(|| "Failed to sign in: session expired".to_string()),
            ),
        }
    });

    let rows = move || {
        session.get().account().cloned().map(|account| {
            let organization = account
                .organization
                .as_ref()
                .map(|org| org.display_name.clone())
                .unwrap_or_default();
            [
                ("Organization", account.owner.clone()),
                ("Name", account.name.clone()),
                ("Display name", account.display_name.clone()),
                ("Email", account.email.clone()),
                ("Phone", account.phone.clone()),
                ("Organization name", organization),
                ("Administrator", account.is_admin_user().to_string()),
            ]
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <dt class="font-medium text-gray-500">{label}</dt>
                    <dd class="text-gray-900 dark:text-white">{value}</dd>
                }
            })
            .collect_view()
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"My Account"</h1>
                <div class="flex items-center gap-3">
                    {move || refresh.pending().get().then(|| view! { <Spinner /> })}
                    <Button
                        secondary=true
                        disabled=refresh.pending()
                        on_click=Callback::new(move |()| {
                            refresh.dispatch(());
                        })
                    >
                        "Refresh"
                    </Button>
                </div>
            </div>
            <dl class="grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm">{rows}</dl>
        </div>
    }
}
