//! Top bar with the app title and the signed-in identity.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::auth::SessionContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let busy = RwSignal::new(false);

    let identity = move || {
        let state = session.state();
        let email = state.session.email().unwrap_or_default().to_owned();
        let role = state.session.role().map(|r| r.label()).unwrap_or_default();
        format!("{email} ({role})")
    };

    // The route guard sends the browser to login once the session is gone.
    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            if let Err(e) = api.logout().await {
                leptos::logging::warn!("logout request failed: {e}");
            }
            session.clear();
            busy.set(false);
        });
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__title">"QA Console"</span>
            <span class="nav-bar__spacer"></span>
            <Show when=move || session.is_logged_in()>
                <span class="nav-bar__self">{identity}</span>
                <button class="btn nav-bar__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
