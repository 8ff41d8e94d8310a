//! Admin dialog for editing a consult's question and answer.

use leptos::prelude::*;

use crate::components::notice_modal::notify;
use crate::net::api::ApiClient;
use crate::net::types::{Consult, ConsultUpdate};
use crate::state::notice::{Notice, NoticeState};

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";

#[component]
pub fn ConsultForm(consult: Consult, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let id = consult.id;
    let question = RwSignal::new(consult.question);
    let answer = RwSignal::new(consult.answer.unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = ConsultUpdate { question: question.get_untracked(), answer: answer.get_untracked() };
        if update.question.trim().is_empty() {
            error.set(Some(EMPTY_QUESTION_MESSAGE.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = api.update_consult(id, &update).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    notify(notices, Notice::success("Consult updated."));
                    on_close.run(());
                }
                Err(e) => {
                    let message = e.user_message("Could not update the consult.");
                    error.set(Some(message.clone()));
                    notify(notices, Notice::error(message));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--form">
                <h2>"Edit consult"</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Question"
                        <textarea
                            class="form__input"
                            rows="4"
                            prop:value=move || question.get()
                            on:input=move |ev| question.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        ></textarea>
                    </label>
                    <label class="form__label">
                        "Answer"
                        <textarea
                            class="form__input"
                            rows="4"
                            prop:value=move || answer.get()
                            on:input=move |ev| answer.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| on_close.run(())
                            disabled=move || busy.get()
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Update" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
