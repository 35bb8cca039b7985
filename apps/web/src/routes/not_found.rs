//! Minimalistic 404 page for unknown routes.

use crate::app_lib::{browser, theme::Theme};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                    "Page not found"
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "Sorry, the page you visited does not exist."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 transition-all"
                    >
                        "Back Home"
                    </A>
                    <button class=Theme::BUTTON_SECONDARY on:click=move |_| browser::back()>
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
