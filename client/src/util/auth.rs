//! Route guard mapping the session to the views it may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation re-evaluates [`guard_redirect`]. Rules are applied in
//! order and the first match wins:
//!
//! 1. no session, path not login/register -> login
//! 2. admin, path outside `/admin` -> admin dashboard
//! 3. consultant, path other than the queue -> queue
//! 4. user, path other than search -> search
//! 5. otherwise the requested view renders

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionContext};
use crate::state::session::{Role, Session};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const SEARCH_PATH: &str = "/search";
pub const CONSULT_PATH: &str = "/consult";
pub const ADMIN_PREFIX: &str = "/admin";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_CONSULTS_PATH: &str = "/admin/consults";

/// Landing view for a signed-in role.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD_PATH,
        Role::Consultant => CONSULT_PATH,
        Role::User => SEARCH_PATH,
    }
}

/// Strip a trailing slash so `/search/` and `/search` compare equal.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// Where the guard sends a visitor to `path`, or `None` to render it.
pub fn guard_redirect(session: &Session, path: &str) -> Option<&'static str> {
    let path = normalize_path(path);
    match session.role() {
        None => (path != LOGIN_PATH && path != REGISTER_PATH).then_some(LOGIN_PATH),
        Some(Role::Admin) => (!is_admin_path(path)).then_some(ADMIN_DASHBOARD_PATH),
        Some(Role::Consultant) => (path != CONSULT_PATH).then_some(CONSULT_PATH),
        Some(Role::User) => (path != SEARCH_PATH).then_some(SEARCH_PATH),
    }
}

/// What the router does with `path` in the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Stored session not restored yet: neither redirect nor render.
    Loading,
    Redirect(&'static str),
    Render,
}

pub fn gate_decision(state: &AuthState, path: &str) -> Gate {
    if state.loading {
        return Gate::Loading;
    }
    guard_redirect(&state.session, path).map_or(Gate::Render, Gate::Redirect)
}

/// Redirect on every path or session change once the session is restored.
pub fn install_route_guard<F>(session: SessionContext, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if let Gate::Redirect(target) = gate_decision(&session.state(), &path) {
            leptos::logging::log!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
