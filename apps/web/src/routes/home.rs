//! Landing page for signed-in accounts.

use crate::features::session::use_session;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    move || {
        session.get().account().cloned().map(|account| {
            let organization = account
                .organization
                .as_ref()
                .map_or_else(|| account.owner.clone(), |org| org.display_name.clone());
            let name = if account.display_name.is_empty() {
                account.name.clone()
            } else {
                account.display_name.clone()
            };
            let is_admin = account.is_admin_user();

            view! {
                <div class="space-y-4">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {format!("Welcome, {name}")}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {format!("Signed in to {organization}")}
                    </p>
                    {is_admin
                        .then(|| {
                            view! {
                                <p class="text-sm text-gray-500">
                                    "Use the menu to manage organizations, users and applications."
                                </p>
                            }
                        })}
                    <A href="/account" {..} class="text-sm font-medium text-blue-700 hover:underline">
                        "My Account"
                    </A>
                </div>
            }
        })
    }
}
