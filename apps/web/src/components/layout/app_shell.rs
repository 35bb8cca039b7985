//! Console chrome: header with the menu and account dropdown, content area and
//! footer. Door pages (login, signup, callback, prompt, forget) render bare.
//! Navigation remains client-side; the API must enforce access control.

use crate::{
    app_lib::build_info::short_commit_hash,
    components::ui::{Avatar, Toasts},
    features::{
        navigation::{is_door_page, menu_items, MenuItem, MenuTracker},
        session::{
            types::{short_name, Account},
            use_session,
        },
    },
};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

const MENU_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700";

/// Wraps routes with the console header, notices and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let location = use_location();
    let door = Memo::new(move |_| location.pathname.with(|path| is_door_page(path)));

    view! {
        <div class="min-h-screen flex flex-col">
            <Toasts />
            <Show when=move || !door.get()>
                <ConsoleHeader />
            </Show>
            <main class=move || {
                if door.get() {
                    "flex-1 flex items-center justify-center p-4"
                } else {
                    "flex-1 container mx-auto p-4 mt-6"
                }
            }>{children()}</main>
            <Show when=move || !door.get()>
                <ConsoleFooter />
            </Show>
        </div>
    }
}

#[component]
fn ConsoleHeader() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let tracker = RwSignal::new(MenuTracker::default());

    // Back/forward changes the path without a click, so follow the location.
    Effect::new(move |_| {
        let path = location.pathname.get();
        tracker.maybe_update(|tracker| tracker.sync(&path));
    });
    let selected = Memo::new(move |_| tracker.with(MenuTracker::key));

    view! {
        <header class="border-b border-gray-200 dark:bg-gray-900">
            <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                <A href="/" {..} class="flex items-center space-x-3">
                    <span class="font-semibold whitespace-nowrap dark:text-white">"Warden"</span>
                </A>
                <nav>
                    <ul class="font-medium flex flex-col md:flex-row md:space-x-8">
                        {move || {
                            session
                                .with(menu_items)
                                .into_iter()
                                .map(|item| view! { <MenuEntry item=item selected=selected /> })
                                .collect_view()
                        }}
                    </ul>
                </nav>
                {move || session.get().account().cloned().map(|account| view! { <AccountMenu account=account /> })}
            </div>
        </header>
    }
}

#[component]
fn MenuEntry(item: MenuItem, selected: Memo<i32>) -> impl IntoView {
    let active = move || selected.get() == item.key;

    let link = if item.external {
        view! {
            <a href=item.href class=MENU_LINK class:text-blue-700=active>
                {item.label}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=item.href {..} class=MENU_LINK class:text-blue-700=active>
                {item.label}
            </A>
        }
        .into_any()
    };

    view! { <li>{link}</li> }
}

#[component]
fn AccountMenu(account: Account) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (open, set_open) = signal(false);
    let display = short_name(if account.display_name.is_empty() {
        &account.name
    } else {
        &account.display_name
    })
    .to_string();

    let go_to_account = {
        let navigate = navigate.clone();
        move |_: MouseEvent| {
            set_open.set(false);
            navigate("/account", Default::default());
        }
    };
    let on_logout = move |_: MouseEvent| {
        set_open.set(false);
        session.logout(navigate.clone());
    };

    view! {
        <div class="relative">
            <button
                type="button"
                class="flex items-center gap-2 text-sm text-gray-900 dark:text-white"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <Avatar account=account />
                <span>{display}</span>
            </button>
            <ul
                class="absolute right-0 z-30 mt-2 w-40 rounded-lg border border-gray-100 bg-white py-1 text-sm shadow"
                class:hidden=move || !open.get()
            >
                <li>
                    <button
                        type="button"
                        class="block w-full px-4 py-2 text-left hover:bg-gray-100"
                        on:click=go_to_account
                    >
                        "My Account"
                    </button>
                </li>
                <li>
                    <button
                        type="button"
                        class="block w-full px-4 py-2 text-left hover:bg-gray-100"
                        on:click=on_logout
                    >
                        "Logout"
                    </button>
                </li>
            </ul>
        </div>
    }
}

#[component]
fn ConsoleFooter() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 py-4 text-center text-xs text-gray-500">
            "Warden identity console · build "
            <code>{short_commit_hash()}</code>
        </footer>
    }
}
