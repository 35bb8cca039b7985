//! Placeholder for the resource list and edit pages. It shows the resource kind
//! and the route parameters so every console route has a view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ResourcePage(
    title: &'static str,
    /// Route parameters to display, in order.
    #[prop(optional)]
    params: &'static [&'static str],
) -> impl IntoView {
    let route_params = use_params_map();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
            <dl class="grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm">
                {params
                    .iter()
                    .map(|name| {
                        let value = move || {
                            route_params.with(|map| map.get(name)).unwrap_or_default()
                        };
                        view! {
                            <dt class="font-medium text-gray-500">{name.replace('_', " ")}</dt>
                            <dd class="text-gray-900 dark:text-white">{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
