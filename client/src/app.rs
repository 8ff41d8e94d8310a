//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{
    nav_bar::NavBar,
    notice_modal::NoticeModal,
    route_gate::{RouteGate, RouteGuard},
};
use crate::net::api::ApiClient;
use crate::pages::admin::{AdminLayout, consults::ConsultsPage, dashboard::AdminDashboardPage, users::UsersPage};
use crate::pages::{
    auth::{LoginPage, RegisterPage},
    consult::UnansweredPage,
    search::SearchPage,
};
use crate::state::{auth::SessionContext, notice::NoticeState};
use crate::util::auth::ADMIN_DASHBOARD_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, API client and notice contexts and sets up routing.
/// The stored session is restored after hydration so the server render and
/// the first client render agree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::browser();
    let api = ApiClient::new(session);
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(api);
    provide_context(notices);

    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/qa-console.css"/>
        <Title text="QA Console"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <ParentRoute path=StaticSegment("") view=RouteGate>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("search") view=SearchPage/>
                        <Route path=StaticSegment("consult") view=UnansweredPage/>
                        <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                            <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                            <Route path=StaticSegment("users") view=UsersPage/>
                            <Route path=StaticSegment("consults") view=ConsultsPage/>
                            <Route
                                path=StaticSegment("")
                                view=|| view! { <Redirect path=ADMIN_DASHBOARD_PATH/> }
                            />
                        </ParentRoute>
                        <Route path=StaticSegment("") view=|| ()/>
                    </ParentRoute>
                </Routes>
            </main>
            <NoticeModal/>
        </Router>
    }
}
