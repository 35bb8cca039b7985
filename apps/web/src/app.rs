use crate::components::AppShell;
use crate::features::{notify::NoticeProvider, session::SessionProvider};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <NoticeProvider>
            <SessionProvider>
                <Router>
                    <AppShell>
                        <AppRoutes />
                    </AppShell>
                </Router>
            </SessionProvider>
        </NoticeProvider>
    }
}
