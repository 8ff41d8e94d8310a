//! Create/edit dialog for a backend account.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;

use crate::components::notice_modal::notify;
use crate::net::api::ApiClient;
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::{User, UserPayload};
use crate::state::notice::{Notice, NoticeState};
use crate::state::session::Role;

pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required.";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required for new users.";

/// Validate the form. A blank password is omitted when editing and
/// rejected when creating.
///
/// # Errors
///
/// [`ApiError::Validation`] for a blank email, or a blank password on create.
pub fn build_user_payload(email: &str, password: &str, role: Role, editing: bool) -> ApiResult<UserPayload> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation(EMAIL_REQUIRED_MESSAGE));
    }
    let password = (!password.is_empty()).then(|| password.to_owned());
    if password.is_none() && !editing {
        return Err(ApiError::validation(PASSWORD_REQUIRED_MESSAGE));
    }
    Ok(UserPayload { email: email.to_owned(), password, role })
}

/// `user` is `None` when creating.
#[component]
pub fn UserForm(user: Option<User>, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let editing_id = user.as_ref().map(|u| u.id);
    let email = RwSignal::new(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(user.as_ref().and_then(|u| u.role.known()).unwrap_or(Role::User));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match build_user_payload(
            &email.get_untracked(),
            &password.get_untracked(),
            role.get_untracked(),
            editing_id.is_some(),
        ) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.user_message(EMAIL_REQUIRED_MESSAGE)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => api.update_user(id, &payload).await.map(|()| "User updated."),
                None => api.create_user(&payload).await.map(|()| "User created."),
            };
            busy.set(false);
            match result {
                Ok(message) => {
                    notify(notices, Notice::success(message));
                    on_close.run(());
                }
                Err(e) => {
                    let message = e.user_message("Could not save the user.");
                    error.set(Some(message.clone()));
                    notify(notices, Notice::error(message));
                }
            }
        });
    };

    let title = if editing_id.is_some() { "Edit user" } else { "Add user" };
    let password_label = if editing_id.is_some() { "Password (leave blank to keep)" } else { "Password" };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--form">
                <h2>{title}</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="form__label">
                        {password_label}
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="form__label">
                        "Role"
                        <select
                            class="form__input"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| {
                                if let Ok(parsed) = event_target_value(&ev).parse::<Role>() {
                                    role.set(parsed);
                                }
                            }
                            disabled=move || busy.get()
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                                .collect_view()}
                        </select>
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
                            {move || {
                                if busy.get() {
                                    "Saving..."
                                } else if editing_id.is_some() {
                                    "Update"
                                } else {
                                    "Add"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
