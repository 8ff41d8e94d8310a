//! Admin section navigation.

#[cfg(test)]
#[path = "side_nav_test.rs"]
mod side_nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::auth::{ADMIN_CONSULTS_PATH, ADMIN_DASHBOARD_PATH, ADMIN_USERS_PATH};

pub const ADMIN_LINKS: [(&str, &str); 3] = [
    (ADMIN_DASHBOARD_PATH, "Dashboard"),
    (ADMIN_USERS_PATH, "Users"),
    (ADMIN_CONSULTS_PATH, "Consults"),
];

/// Whether the link to `href` should be highlighted at `pathname`.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn SideNav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="side-nav">
            {ADMIN_LINKS
                .into_iter()
                .map(|(href, label)| {
                    let class = move || {
                        if is_active(&pathname.get(), href) {
                            "side-nav__link side-nav__link--active"
                        } else {
                            "side-nav__link"
                        }
                    };
                    view! {
                        <a class=class href=href>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
