//! Consultant queue of unanswered questions.

#[cfg(test)]
#[path = "consult_test.rs"]
mod consult_test;

use leptos::prelude::*;

use crate::components::answer_form::AnswerForm;
use crate::net::api::{AnswerChannel, ApiClient};
use crate::net::types::Consult;
use crate::state::list::ListState;

/// Consults still waiting for an answer, in backend order.
pub fn unanswered(consults: &[Consult]) -> Vec<Consult> {
    consults.iter().filter(|c| !c.is_answered()).cloned().collect()
}

#[component]
pub fn UnansweredPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = RwSignal::new(ListState::<Consult>::default());

    let load = move || {
        list.update(ListState::begin);
        leptos::task::spawn_local(async move {
            let result = api.unanswered_consults().await;
            list.update(|l| l.settle(result, "Could not load the question queue."));
        });
    };
    Effect::new(move || load());

    let on_answered = Callback::new(move |()| load());
    let rows = move || list.with(|l| unanswered(&l.items));

    view! {
        <div class="consult-page">
            <h1>"Unanswered questions"</h1>
            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="form-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !rows().is_empty()
                fallback=move || {
                    view! {
                        <p class="consult-page__empty">
                            {move || {
                                if list.with(|l| l.loading) { "Loading..." } else { "No unanswered questions." }
                            }}
                        </p>
                    }
                }
            >
                <ul class="consult-list">
                    <For each=rows key=|c| c.id let:consult>
                        <li class="consult-list__item">
                            <p class="consult-list__question">{consult.question.clone()}</p>
                            <p class="consult-list__meta">
                                "Asked by "
                                {consult.user_email.clone()}
                                {consult.created_at.clone().map(|at| format!(" on {at}"))}
                            </p>
                            <AnswerForm
                                consult_id=consult.id
                                channel=AnswerChannel::Consultant
                                on_answered=on_answered
                            />
                        </li>
                    </For>
                </ul>
            </Show>
        </div>
    }
}
