//! Route guard installation and the gate that holds back guarded views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGuard` sits at router level so it also redirects from paths no
//! route matches. `RouteGate` is a pathless parent route: until the stored
//! session is restored, and while a redirect is pending, its child views stay
//! unmounted so none of them fetches with the wrong session. The route tree
//! itself is always rendered so the server can discover it.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::SessionContext;
use crate::util::auth::{Gate, gate_decision, install_route_guard};

/// Redirects on every path or session change. Renders nothing.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    install_route_guard(session, use_location().pathname, use_navigate());
}

#[component]
pub fn RouteGate() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let pathname = use_location().pathname;

    let allowed = move || gate_decision(&session.state(), &pathname.get()) == Gate::Render;

    view! {
        <Show when=allowed fallback=|| view! { <p class="route-gate__loading">"Loading..."</p> }>
            <Outlet/>
        </Show>
    }
}
