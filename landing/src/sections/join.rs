//! Waitlist sign-up.
//!
//! Nothing leaves the browser: a valid lead goes to [`SimulatedSink`] after the
//! configured delay and is dropped. Both timers belong to this component and
//! are cleared when it unmounts.

use std::time::Duration;

use crate::site_config;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use megift::waitlist::SUCCESS_MESSAGE;
use megift::{SimulatedSink, SubmitStart, WaitlistError, WaitlistForm};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-white/90 text-gray-800 placeholder-gray-500 border border-white/30 focus:outline-none focus:ring-2 focus:ring-white/50";

type TimerSlot = StoredValue<Option<TimeoutHandle>>;

fn cancel(slot: TimerSlot) {
    slot.update_value(|pending| {
        if let Some(handle) = pending.take() {
            handle.clear();
        }
    });
}

/// Replace whatever is in `slot` with a new timeout. Returns false if the browser refused.
fn schedule(slot: TimerSlot, delay: Duration, callback: impl FnOnce() + 'static) -> bool {
    cancel(slot);
    match set_timeout_with_handle(callback, delay) {
        Ok(handle) => {
            slot.set_value(Some(handle));
            true
        }
        Err(err) => {
            log::warn!("[megift][waitlist] could not schedule timer: {err:?}");
            false
        }
    }
}

#[component]
pub fn JoinWaitlist() -> impl IntoView {
    let timing = site_config().timing;
    let submit_delay = timing.submit_delay();
    let success_display = timing.success_display();

    let form = RwSignal::new(WaitlistForm::new());
    let submit_timer: TimerSlot = StoredValue::new(None);
    let dismiss_timer: TimerSlot = StoredValue::new(None);

    on_cleanup(move || {
        cancel(submit_timer);
        cancel(dismiss_timer);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(SubmitStart::Started(lead)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        let finish = move || {
            form.update(|f| f.complete_with(&SimulatedSink, &lead));
            if form.with_untracked(|f| f.is_submitted()) {
                schedule(dismiss_timer, success_display, move || {
                    form.update(|f| f.dismiss_success());
                });
            }
        };

        if !schedule(submit_timer, submit_delay, finish) {
            form.update(|f| f.complete_submit(Err(WaitlistError::SubmissionFailed)));
        }
    };

    view! {
        <section id="join" class="py-20 bg-gradient-to-r from-[#ED2F59] to-[#B51235] text-white">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center">
                    <h2 class="text-3xl font-bold mb-6">"Participe da pré-release"</h2>
                    <p class="text-xl mb-8">
                        "Seja um dos primeiros a experimentar o Megift. "
                        "Inscreva-se para receber acesso antecipado e novidades exclusivas."
                    </p>

                    <form
                        class="max-w-md mx-auto bg-white/20 p-8 rounded-xl backdrop-blur-sm border border-white/30"
                        novalidate=true
                        on:submit=on_submit
                    >
                        {move || {
                            form.with(|f| f.error_message())
                                .map(|message| {
                                    view! {
                                        <div class="waitlist-error bg-red-500/90 text-white p-3 rounded-lg mb-4" role="alert">
                                            {message}
                                        </div>
                                    }
                                })
                        }}

                        <Show when=move || form.with(|f| f.is_submitted())>
                            <div class="waitlist-success bg-green-500/90 text-white p-3 rounded-lg mb-4" role="status">
                                {SUCCESS_MESSAGE}
                            </div>
                        </Show>

                        <div class="mb-4">
                            <input
                                type="text"
                                name="name"
                                placeholder="Seu nome"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.name().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_name(value));
                                }
                            />
                        </div>

                        <div class="mb-4">
                            <input
                                type="email"
                                name="email"
                                placeholder="Seu e-mail"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.email().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_email(value));
                                }
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-white text-[#ED2F59] font-bold py-3 px-4 rounded-lg hover:bg-gray-100 transition shadow-lg disabled:opacity-70"
                            disabled=move || form.with(|f| f.is_pending())
                        >
                            {move || if form.with(|f| f.is_pending()) { "Enviando..." } else { "Quero participar" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
