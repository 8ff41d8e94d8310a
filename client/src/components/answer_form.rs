//! Answer entry for one consult, used by consultants and admins.

#[cfg(test)]
#[path = "answer_form_test.rs"]
mod answer_form_test;

use leptos::prelude::*;

use crate::components::notice_modal::notify;
use crate::net::api::{AnswerChannel, ApiClient};
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::AnswerPayload;
use crate::state::auth::SessionContext;
use crate::state::notice::{Notice, NoticeState};

pub const EMPTY_ANSWER_MESSAGE: &str = "Please enter an answer.";
pub const INVALID_EMAIL_MESSAGE: &str = "Your account email is not valid.";

/// Loose `local@domain.tld` shape check: no whitespace, exactly one `@`,
/// and a dot inside the domain.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains('@') && !s.chars().any(char::is_whitespace);
    clean(local)
        && clean(domain)
        && domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate the form and build the request body.
///
/// # Errors
///
/// [`ApiError::Validation`] for a blank answer, or for an admin whose
/// session email fails [`is_plausible_email`].
pub fn build_answer(consult_id: i64, answer: &str, email: &str, channel: AnswerChannel) -> ApiResult<AnswerPayload> {
    if answer.trim().is_empty() {
        return Err(ApiError::validation(EMPTY_ANSWER_MESSAGE));
    }
    if channel == AnswerChannel::Admin && !is_plausible_email(email) {
        return Err(ApiError::validation(INVALID_EMAIL_MESSAGE));
    }
    Ok(AnswerPayload { consult_id, answer: answer.to_owned(), email: email.to_owned() })
}

#[component]
pub fn AnswerForm(
    consult_id: i64,
    channel: AnswerChannel,
    on_answered: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let answer = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email = session.email_untracked().unwrap_or_default();
        let payload = match build_answer(consult_id, &answer.get_untracked(), &email, channel) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.user_message(EMPTY_ANSWER_MESSAGE)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.answer_consult(channel, &payload).await {
                Ok(()) => {
                    answer.set(String::new());
                    notify(notices, Notice::success("Answer submitted."));
                    on_answered.run(());
                }
                Err(e) => {
                    let message = e.user_message("Could not submit the answer.");
                    error.set(Some(message.clone()));
                    notify(notices, Notice::error(message));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="answer-form" on:submit=on_submit>
            <textarea
                class="answer-form__input"
                rows="4"
                placeholder="Type your answer"
                prop:value=move || answer.get()
                on:input=move |ev| answer.set(event_target_value(&ev))
                disabled=move || busy.get()
            ></textarea>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="answer-form__actions">
                {on_cancel
                    .map(|cancel| {
                        view! {
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| cancel.run(())
                                disabled=move || busy.get()
                            >
                                "Cancel"
                            </button>
                        }
                    })}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send answer" }}
                </button>
            </div>
        </form>
    }
}
