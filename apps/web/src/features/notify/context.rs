use crate::features::notify::queue::{NoticeKind, NoticeQueue};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notice stays on screen.
const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub queue: RwSignal<NoticeQueue>,
}

impl NoticeContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "error notice");
        self.push(NoticeKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message));

        let queue = self.queue;
        Timeout::new(DISMISS_AFTER_MS, move || {
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

#[component]
pub fn NoticeProvider(children: Children) -> impl IntoView {
    provide_context(NoticeContext {
        queue: RwSignal::new(NoticeQueue::default()),
    });

    view! { {children()} }
}

/// Returns the notice context, or a detached one outside the provider.
pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>().unwrap_or_else(|| NoticeContext {
        queue: RwSignal::new(NoticeQueue::default()),
    })
}
