//! Modal for the app-wide transient notice.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};

#[cfg(feature = "hydrate")]
const SUCCESS_DISMISS_MS: u32 = 2_500;

/// Show `notice`, replacing any visible one.
pub fn notify(notices: RwSignal<NoticeState>, notice: Notice) {
    notices.update(|n| {
        n.push(notice);
    });
}

/// Renders the current notice. Success notices close themselves.
#[component]
pub fn NoticeModal() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let (seq, kind) = notices.with(|n| (n.seq, n.current.as_ref().map(|c| c.kind)));
        if kind != Some(NoticeKind::Success) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
            notices.update(|n| n.dismiss(seq));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    let on_close = move |_| notices.update(NoticeState::close);

    view! {
        <Show when=move || notices.with(|n| n.current.is_some())>
            <div class="dialog-backdrop" on:click=on_close>
                {move || {
                    notices
                        .get()
                        .current
                        .map(|notice| {
                            view! {
                                <div
                                    class=format!("dialog {}", notice.kind.class())
                                    role="alert"
                                    on:click=move |ev| ev.stop_propagation()
                                >
                                    <h2>{notice.title}</h2>
                                    <p>{notice.text}</p>
                                    <div class="dialog__actions">
                                        <button class="btn btn--primary" on:click=on_close>
                                            "OK"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
