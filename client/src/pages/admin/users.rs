//! Admin user management.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_modal::notify;
use crate::components::user_form::UserForm;
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::state::list::ListState;
use crate::state::notice::{Notice, NoticeState};

/// Which user form is open, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
enum FormTarget {
    Create,
    Edit(User),
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let list = RwSignal::new(ListState::<User>::default());
    let form = RwSignal::new(None::<FormTarget>);
    let pending_delete = RwSignal::new(None::<User>);
    let deleting = RwSignal::new(false);

    let load = move || {
        list.update(ListState::begin);
        leptos::task::spawn_local(async move {
            let result = api.users().await;
            list.update(|l| l.settle(result, "Could not load users."));
        });
    };
    Effect::new(move || load());

    let on_form_close = Callback::new(move |()| {
        form.set(None);
        load();
    });
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(user) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match api.delete_user(user.id).await {
                Ok(()) => {
                    notify(notices, Notice::success(format!("Deleted {}.", user.email)));
                    load();
                }
                Err(e) => notify(notices, Notice::error(e.user_message("Could not delete the user."))),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    view! {
        <div class="users-page">
            <header class="page-header">
                <h1>"Users"</h1>
                <button class="btn btn--primary" on:click=move |_| form.set(Some(FormTarget::Create))>
                    "Add user"
                </button>
            </header>
            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="form-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.get().items key=|u| (u.id, u.email.clone(), u.role.clone()) let:user>
                        {
                            let edit_target = user.clone();
                            let delete_target = user.clone();
                            view! {
                                <tr>
                                    <td>{user.id}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.role.label()}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class="btn"
                                            on:click=move |_| form.set(Some(FormTarget::Edit(edit_target.clone())))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || list.with(|l| l.loading)>
                <p>"Loading users..."</p>
            </Show>
            {move || {
                form.get()
                    .map(|target| {
                        let user = match target {
                            FormTarget::Create => None,
                            FormTarget::Edit(user) => Some(user),
                        };
                        view! { <UserForm user=user on_close=on_form_close/> }
                    })
            }}
            {move || {
                pending_delete
                    .get()
                    .map(|user| {
                        view! {
                            <ConfirmDialog
                                title="Delete user"
                                message=format!("Delete {}? This cannot be undone.", user.email)
                                busy=deleting
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
