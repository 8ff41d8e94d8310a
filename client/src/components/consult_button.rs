//! Escalates the current search query to a human consultant.

use leptos::prelude::*;

use crate::components::notice_modal::notify;
use crate::net::api::ApiClient;
use crate::state::auth::SessionContext;
use crate::state::notice::{Notice, NoticeState};

#[component]
pub fn ConsultButton(#[prop(into)] question: Signal<String>, on_sent: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        let question = question.get_untracked();
        let email = session.email_untracked().unwrap_or_default();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api.request_consult(&question, &email).await {
                Ok(()) => {
                    notify(notices, Notice::success("Your question was sent to a consultant."));
                    on_sent.run(());
                }
                Err(e) => notify(notices, Notice::error(e.user_message("Could not send your question."))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="consult-button">
            <p>"Not what you were looking for?"</p>
            <button class="btn btn--primary" on:click=on_click disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Consult an expert" }}
            </button>
        </div>
    }
}
