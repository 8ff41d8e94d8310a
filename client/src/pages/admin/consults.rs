//! Admin consult management: browse, answer, edit and delete consults.

#[cfg(test)]
#[path = "consults_test.rs"]
mod consults_test;

use leptos::prelude::*;

use crate::components::answer_form::AnswerForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::consult_form::ConsultForm;
use crate::components::notice_modal::notify;
use crate::net::api::{AnswerChannel, ApiClient};
use crate::net::types::Consult;
use crate::state::list::ListState;
use crate::state::notice::{Notice, NoticeState};

/// Rows to display; with `unanswered_only` set, answered consults are hidden.
pub fn filter_consults(consults: &[Consult], unanswered_only: bool) -> Vec<Consult> {
    consults
        .iter()
        .filter(|c| !unanswered_only || !c.is_answered())
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ConsultDialog {
    View(Consult),
    Edit(Consult),
    Answer(Consult),
    Delete(Consult),
}

#[component]
pub fn ConsultsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let list = RwSignal::new(ListState::<Consult>::default());
    let unanswered_only = RwSignal::new(true);
    let dialog = RwSignal::new(None::<ConsultDialog>);
    let deleting = RwSignal::new(false);

    let load = move || {
        list.update(ListState::begin);
        leptos::task::spawn_local(async move {
            let result = api.admin_consults().await;
            list.update(|l| l.settle(result, "Could not load consults."));
        });
    };
    Effect::new(move || load());

    let close_and_reload = Callback::new(move |()| {
        dialog.set(None);
        load();
    });
    let close = Callback::new(move |()| dialog.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(ConsultDialog::Delete(consult)) = dialog.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match api.delete_consult(consult.id).await {
                Ok(()) => {
                    notify(notices, Notice::success("Consult deleted."));
                    load();
                }
                Err(e) => notify(notices, Notice::error(e.user_message("Could not delete the consult."))),
            }
            deleting.set(false);
            dialog.set(None);
        });
    });

    let rows = move || list.with(|l| filter_consults(&l.items, unanswered_only.get()));

    view! {
        <div class="consults-page">
            <header class="page-header">
                <h1>"Consults"</h1>
                <label class="page-header__filter">
                    <input
                        type="checkbox"
                        prop:checked=move || unanswered_only.get()
                        on:change=move |ev| unanswered_only.set(event_target_checked(&ev))
                    />
                    " Unanswered only"
                </label>
            </header>
            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="form-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Question"</th>
                        <th>"Asked by"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=rows key=|c| (c.id, c.question.clone(), c.answer.clone()) let:consult>
                        {consult_row(consult, dialog)}
                    </For>
                </tbody>
            </table>
            <Show when=move || list.with(|l| l.loading)>
                <p>"Loading consults..."</p>
            </Show>
            <Show when=move || !list.with(|l| l.loading) && rows().is_empty()>
                <p class="consults-page__empty">"No consults to show."</p>
            </Show>
            {move || {
                dialog
                    .get()
                    .map(|open| match open {
                        ConsultDialog::View(consult) => {
                            view! {
                                <div class="dialog-backdrop" on:click=move |_| close.run(())>
                                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                        <h2>"Answer"</h2>
                                        <p class="dialog__question">{consult.question}</p>
                                        <p>{consult.answer.unwrap_or_default()}</p>
                                        <div class="dialog__actions">
                                            <button class="btn btn--primary" on:click=move |_| close.run(())>
                                                "Close"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        ConsultDialog::Edit(consult) => {
                            view! { <ConsultForm consult=consult on_close=close_and_reload/> }.into_any()
                        }
                        ConsultDialog::Answer(consult) => {
                            view! {
                                <div class="dialog-backdrop">
                                    <div class="dialog dialog--form">
                                        <h2>"Answer consult"</h2>
                                        <p class="dialog__meta">"Asked by " {consult.user_email}</p>
                                        <p class="dialog__question">{consult.question}</p>
                                        <AnswerForm
                                            consult_id=consult.id
                                            channel=AnswerChannel::Admin
                                            on_answered=close_and_reload
                                            on_cancel=close
                                        />
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        ConsultDialog::Delete(consult) => {
                            view! {
                                <ConfirmDialog
                                    title="Delete consult"
                                    message=format!("Delete consult #{}? This cannot be undone.", consult.id)
                                    busy=deleting
                                    on_confirm=on_delete_confirm
                                    on_cancel=close
                                />
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}

fn consult_row(consult: Consult, dialog: RwSignal<Option<ConsultDialog>>) -> impl IntoView {
    let answered = consult.is_answered();
    let open = {
        let consult = consult.clone();
        move |make: fn(Consult) -> ConsultDialog| dialog.set(Some(make(consult.clone())))
    };
    let (open_view, open_edit, open_answer, open_delete) = (open.clone(), open.clone(), open.clone(), open);

    view! {
        <tr>
            <td>{consult.id}</td>
            <td class="data-table__wide">{consult.question}</td>
            <td>{consult.user_email}</td>
            <td>{if answered { "Answered" } else { "Waiting" }}</td>
            <td class="data-table__actions">
                {answered
                    .then(|| {
                        view! {
                            <button class="btn" on:click=move |_| open_view(ConsultDialog::View)>
                                "View"
                            </button>
                        }
                    })}
                <button class="btn" on:click=move |_| open_edit(ConsultDialog::Edit)>
                    "Edit"
                </button>
                {(!answered)
                    .then(|| {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| open_answer(ConsultDialog::Answer)>
                                "Answer"
                            </button>
                        }
                    })}
                <button class="btn btn--danger" on:click=move |_| open_delete(ConsultDialog::Delete)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
