//! Admin section: dashboard, user management, consult management.
//!
//! ARCHITECTURE
//! ============
//! `AdminLayout` is the parent route view; child pages render into its
//! outlet next to the side navigation.

pub mod consults;
pub mod dashboard;
pub mod users;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::side_nav::SideNav;

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="admin-layout">
            <SideNav/>
            <section class="admin-layout__content">
                <Outlet/>
            </section>
        </div>
    }
}
