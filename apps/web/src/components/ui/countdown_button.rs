//! Send-code button that locks itself for a cool-down after a code was sent.

use crate::{app_lib::theme::Theme, features::verify::countdown::Countdown};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TICK_MS: u32 = 1_000;

/// Starts a cool-down of `seconds` on the signal, ticking once per second.
pub fn start_countdown(countdown: RwSignal<Countdown>, seconds: u32) {
    countdown.set(Countdown::start(seconds));
    schedule_tick(countdown);
}

fn schedule_tick(countdown: RwSignal<Countdown>) {
    Timeout::new(TICK_MS, move || {
        // The signal is gone once the dialog closes.
        if countdown.try_update(Countdown::tick).unwrap_or(false) {
            schedule_tick(countdown);
        }
    })
    .forget();
}

#[component]
pub fn CountdownButton(
    countdown: RwSignal<Countdown>,
    /// Set while the send-code request is in flight.
    #[prop(into)]
    busy: Signal<bool>,
    on_send: Callback<()>,
) -> impl IntoView {
    let locked = move || busy.get() || countdown.with(Countdown::is_running);

    view! {
        <button
            type="button"
            class=Theme::BUTTON_SECONDARY
            class:cursor-not-allowed=locked
            class:opacity-70=locked
            disabled=locked
            on:click=move |_| {
                if !locked() {
                    on_send.run(());
                }
            }
        >
            {move || countdown.with(|countdown| countdown.label("Send Code"))}
        </button>
    }
}
