//! Search results with a per-answer Like action.

#[cfg(test)]
#[path = "answer_list_test.rs"]
mod answer_list_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::notice_modal::notify;
use crate::net::api::ApiClient;
use crate::net::types::SearchResult;
use crate::state::notice::{Notice, NoticeState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeStatus {
    Idle,
    Pending,
    Liked,
}

/// Like bookkeeping keyed by answer text, valid for one result set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    liked: HashSet<String>,
    pending: HashSet<String>,
}

impl LikeState {
    pub fn status(&self, answer: &str) -> LikeStatus {
        if self.liked.contains(answer) {
            LikeStatus::Liked
        } else if self.pending.contains(answer) {
            LikeStatus::Pending
        } else {
            LikeStatus::Idle
        }
    }

    /// Mark `answer` in flight. Returns `false` if it is already pending or liked.
    pub fn begin(&mut self, answer: &str) -> bool {
        if self.status(answer) != LikeStatus::Idle {
            return false;
        }
        self.pending.insert(answer.to_owned());
        true
    }

    pub fn finish(&mut self, answer: &str, liked: bool) {
        self.pending.remove(answer);
        if liked {
            self.liked.insert(answer.to_owned());
        }
    }

    pub fn reset(&mut self) {
        self.liked.clear();
        self.pending.clear();
    }
}

/// `query` is the question that produced `results`; likes are recorded
/// against it.
#[component]
pub fn AnswerList(
    #[prop(into)] results: Signal<Vec<SearchResult>>,
    #[prop(into)] query: Signal<String>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let likes = RwSignal::new(LikeState::default());

    Effect::new(move || {
        results.track();
        likes.update(LikeState::reset);
    });

    let on_like = move |answer: String| {
        if !likes.try_update(|l| l.begin(&answer)).unwrap_or(false) {
            return;
        }
        let question = query.get_untracked();
        leptos::task::spawn_local(async move {
            let result = api.like(&question, &answer).await;
            likes.update(|l| l.finish(&answer, result.is_ok()));
            match result {
                Ok(()) => notify(notices, Notice::success("Thanks for rating this answer.")),
                Err(e) => notify(notices, Notice::error(e.user_message("Could not record your like."))),
            }
        });
    };

    view! {
        <section class="answer-list">
            <h3>"Results"</h3>
            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=|| view! { <p class="answer-list__empty">"No results."</p> }
            >
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|result| {
                            let answer = result.answer.clone();
                            let status = {
                                let answer = answer.clone();
                                Signal::derive(move || likes.with(|l| l.status(&answer)))
                            };
                            view! {
                                <article class="answer-list__item">
                                    <div class="answer-list__text">
                                        <p class="answer-list__question">
                                            <strong>"Question: "</strong>
                                            {result.question}
                                        </p>
                                        <p>
                                            <strong>"Answer: "</strong>
                                            {result.answer}
                                        </p>
                                    </div>
                                    <button
                                        class=move || {
                                            if status.get() == LikeStatus::Liked {
                                                "btn like-button like-button--liked"
                                            } else {
                                                "btn like-button"
                                            }
                                        }
                                        disabled=move || status.get() != LikeStatus::Idle
                                        on:click=move |_| on_like(answer.clone())
                                    >
                                        {move || match status.get() {
                                            LikeStatus::Idle => "Like",
                                            LikeStatus::Pending => "Liking...",
                                            LikeStatus::Liked => "Liked",
                                        }}
                                    </button>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </section>
    }
}
