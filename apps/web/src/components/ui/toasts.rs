use crate::{components::ui::Alert, features::notify::use_notices};
use leptos::prelude::*;

/// Stack of transient notices in the top-right corner.
#[component]
pub fn Toasts() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="fixed right-4 top-4 z-50 flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || notices.queue.with(|queue| queue.notices().to_vec())
                key=|notice| notice.id
                let:notice
            >
                <Alert
                    kind=notice.kind
                    message=notice.message.clone()
                    on_dismiss=Callback::new(move |()| notices.dismiss(notice.id))
                />
            </For>
        </div>
    }
}
