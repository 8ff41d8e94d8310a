//! Login and registration views.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_modal::notify;
use crate::net::api::ApiClient;
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::Credentials;
use crate::state::auth::SessionContext;
use crate::state::notice::{Notice, NoticeState};
use crate::util::auth::{LOGIN_PATH, REGISTER_PATH, home_path};

pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "Email and password are required.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login credentials.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error, please try again later.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }

    fn switch_prompt(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Login => ("No account yet? ", REGISTER_PATH, "Register"),
            Self::Register => ("Already registered? ", LOGIN_PATH, "Sign in"),
        }
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// [`ApiError::Validation`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> ApiResult<Credentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation(CREDENTIALS_REQUIRED_MESSAGE));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Message shown for a failed login or registration.
pub fn auth_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Backend { status: 400 | 401, message } => {
            message.clone().unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_owned())
        }
        ApiError::Backend { status: 500, .. } => SERVER_ERROR_MESSAGE.to_owned(),
        other => other.user_message(GENERIC_ERROR_MESSAGE),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthPage mode=AuthMode::Login/> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthPage mode=AuthMode::Register/> }
}

#[component]
fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(Some(auth_error_message(&e)));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let replace = NavigateOptions { replace: true, ..NavigateOptions::default() };
            match mode {
                AuthMode::Login => match api.login(&credentials.email, &credentials.password).await {
                    Ok(new_session) => {
                        let home = new_session.role().map_or(LOGIN_PATH, home_path);
                        leptos::logging::log!("signed in as {}", credentials.email);
                        session.sign_in(new_session);
                        navigate(home, replace);
                    }
                    Err(e) => error.set(Some(auth_error_message(&e))),
                },
                AuthMode::Register => match api.register(&credentials.email, &credentials.password).await {
                    Ok(()) => {
                        notify(notices, Notice::success("Registration successful. Please sign in."));
                        navigate(LOGIN_PATH, replace);
                    }
                    Err(e) => error.set(Some(auth_error_message(&e))),
                },
            }
            busy.set(false);
        });
    };

    let (prompt, other_href, other_label) = mode.switch_prompt();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{mode.title()}</h1>
                <form class="form" on:submit=on_submit>
                    <input
                        class="form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.title() }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {prompt}
                    <a href=other_href>{other_label}</a>
                </p>
            </div>
        </div>
    }
}
