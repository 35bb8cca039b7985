use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="flex items-center gap-3 text-sm text-slate-500">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label=label
            ></div>
        </div>
    }
}
