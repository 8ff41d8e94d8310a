//! Question search for regular users.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::components::answer_list::AnswerList;
use crate::components::consult_button::ConsultButton;
use crate::net::api::ApiClient;
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::SearchResult;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question.";

/// Trimmed query, or a validation error when there is nothing to search.
///
/// # Errors
///
/// [`ApiError::Validation`] for an empty or whitespace-only query.
pub fn validate_query(raw: &str) -> ApiResult<String> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(ApiError::validation(EMPTY_QUERY_MESSAGE));
    }
    Ok(query.to_owned())
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let input = RwSignal::new(String::new());
    let searched_query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<SearchResult>::new());
    let searched = RwSignal::new(false);
    let show_consult = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let query = match validate_query(&input.get_untracked()) {
            Ok(query) => query,
            Err(e) => {
                error.set(Some(e.user_message(EMPTY_QUERY_MESSAGE)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        show_consult.set(false);
        leptos::task::spawn_local(async move {
            match api.search(&query).await {
                Ok(found) => {
                    searched_query.set(query);
                    results.set(found);
                    searched.set(true);
                    show_consult.set(true);
                }
                Err(e) => error.set(Some(e.user_message("Search failed, please try again."))),
            }
            busy.set(false);
        });
    };

    let on_consult_sent = Callback::new(move |()| show_consult.set(false));

    view! {
        <div class="search-page">
            <h1>"Ask a question"</h1>
            <form class="search-form" on:submit=on_submit>
                <input
                    class="form__input search-form__input"
                    type="text"
                    placeholder="Type your question"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || searched.get()>
                <AnswerList results=results query=searched_query/>
            </Show>
            <Show when=move || show_consult.get()>
                <ConsultButton question=searched_query on_sent=on_consult_sent/>
            </Show>
        </div>
    }
}
