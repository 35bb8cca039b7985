use crate::features::session::types::{avatar_color, short_name, Account};
use leptos::prelude::*;

/// Account picture, or a colored initial when the account has none.
#[component]
pub fn Avatar(account: Account) -> impl IntoView {
    if account.avatar.is_empty() {
        let color = avatar_color(&account.name);
        let initial: String = short_name(&account.name)
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        view! {
            <span
                class="inline-flex h-8 w-8 items-center justify-center rounded-full text-sm font-semibold text-white"
                style=format!("background-color: {color}")
            >
                {initial}
            </span>
        }
        .into_any()
    } else {
        view! {
            <img
                src=account.avatar.clone()
                alt=account.name.clone()
                class="h-8 w-8 rounded-full object-cover"
            />
        }
        .into_any()
    }
}
