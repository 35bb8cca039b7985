//! Two-factor verification dialog. The dialog state lives in the caller's
//! signal; `None` means closed. The entered code is only held in a local signal
//! and sent once, in the login body.

use crate::{
    app_lib::{browser, theme::Theme},
    components::ui::{start_countdown, Alert, Button, CountdownButton, Spinner},
    features::{
        notify::{queue::NoticeKind, use_notices},
        verify::{
            client,
            countdown::Countdown,
            dialog::{Outcome, Phase, VerifyDialog},
            mask::mask,
            oauth::OAuthParams,
            request::{send_code_result, VerifyError},
        },
    },
};
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn VerifyModal(dialog: RwSignal<Option<VerifyDialog>>) -> impl IntoView {
    view! {
        <Show when=move || dialog.with(Option::is_some)>
            <VerifyDialogBody dialog=dialog />
        </Show>
    }
}

#[component]
fn VerifyDialogBody(dialog: RwSignal<Option<VerifyDialog>>) -> impl IntoView {
    let notices = use_notices();
    let (code, set_code) = signal(String::new());
    let countdown = RwSignal::new(Countdown::default());
    let sending = RwSignal::new(false);

    let Some(request) = dialog.with_untracked(|state| state.as_ref().map(|d| d.request().clone()))
    else {
        return ().into_any();
    };
    let channel = request.channel;
    let masked = mask(channel, &request.address);
    let title = format!("Verify your {}", channel.label().to_lowercase());

    let submitting =
        Signal::derive(move || dialog.with(|state| state.as_ref().is_some_and(VerifyDialog::is_submitting)));
    let error = move || dialog.with(|state| state.as_ref().and_then(|d| d.error().map(str::to_string)));

    let on_send = Callback::new(move |()| {
        let Some(request) = dialog.with_untracked(|state| state.as_ref().map(|d| d.request().clone()))
        else {
            return;
        };
        sending.set(true);
        spawn_local(async move {
            let result = send_code_result(client::send_code(&request.send_code_args()).await);
            sending.try_set(false);
            match result {
                Ok(message) => {
                    notices.success(message);
                    start_countdown(countdown, request.cool_down_secs);
                }
                Err(message) => notices.error(message),
            }
        });
    });

    let on_verify = Callback::new(move |()| {
        let entered = code.get_untracked();
        let mut submitted = None;
        dialog.update(|state| {
            if let Some(current) = state.as_mut() {
                submitted = Some(current.submit(&entered));
            }
        });

        match submitted {
            Some(Ok(form)) => {
                let oauth = OAuthParams::from_location();
                spawn_local(async move {
                    let result = client::login(&form, oauth.as_ref()).await;
                    let mut outcome = None;
                    dialog.try_update(|state| {
                        if let Some(current) = state.as_mut() {
                            outcome = Some(current.resolve(result));
                        }
                    });
                    match outcome {
                        Some(Outcome::Reload(message)) => {
                            notices.success(message);
                            browser::reload();
                        }
                        Some(Outcome::Retry(message)) => notices.error(message),
                        None => {}
                    }
                });
            }
            Some(Err(VerifyError::EmptyCode)) => notices.error(VerifyError::EmptyCode.to_string()),
            Some(Err(VerifyError::NotOpen)) | None => {}
        }
    });

    let on_cancel = Callback::new(move |()| {
        dialog.update(|state| {
            if let Some(current) = state.as_mut() {
                current.cancel();
            }
            if state
                .as_ref()
                .is_some_and(|current| current.phase() == Phase::Cancelled)
            {
                *state = None;
            }
        });
    });

    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/40 p-4"
            role="dialog"
            aria-modal="true"
        >
            <div class=Theme::DOOR_CARD>
                <h2 class="mb-6 text-lg font-semibold text-slate-900">{title}</h2>
                <div class="space-y-5">
                    <div>
                        <label class=Theme::LABEL>{channel.label()}</label>
                        <input class=Theme::INPUT_DISABLED placeholder=masked disabled=true />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="verify-code">
                            "Code you received"
                        </label>
                        <div class="flex gap-3">
                            <input
                                id="verify-code"
                                class=Theme::INPUT
                                autocomplete="one-time-code"
                                placeholder="Enter your code"
                                prop:value=code
                                on:input=move |event| set_code.set(event_target_value(&event))
                            />
                            <CountdownButton countdown=countdown busy=sending on_send=on_send />
                        </div>
                    </div>
                    {move || {
                        error()
                            .map(|message| view! { <Alert kind=NoticeKind::Error message=message /> })
                    }}
                    <div class="flex items-center justify-end gap-3">
                        {move || submitting.get().then(|| view! { <Spinner label="Verifying" /> })}
                        <Button secondary=true on_click=on_cancel>
                            "Cancel"
                        </Button>
                        <Button disabled=submitting on_click=on_verify>
                            "Verify"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}
