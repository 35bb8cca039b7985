//! Alert banners for success and error messages. Messages must be safe to render
//! and should never include secrets or codes.

use crate::features::notify::queue::NoticeKind;
use leptos::prelude::*;

fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        NoticeKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        NoticeKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    }
}

/// Renders a styled alert banner, with a close button when `on_dismiss` is set.
#[component]
pub fn Alert(
    kind: NoticeKind,
    message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=alert_class(kind) role="alert">
            <div class="flex items-start justify-between gap-4">
                <span>{message}</span>
                {on_dismiss
                    .map(|dismiss| {
                        view! {
                            <button
                                type="button"
                                class="text-xs font-semibold opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| dismiss.run(())
                            >
                                "x"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
