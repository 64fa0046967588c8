//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminDashboardPage,
    company::CompanyDashboardPage,
    login::LoginPage,
    offers::{OfferDetailsPage, OffersPage},
    register::RegisterPage,
    stagiaire::{MyApplicationsPage, ProfilePage},
};
use crate::state::session::SessionContext;
use crate::util::auth::install_logout_redirect;

const STAGIAIRE_ROLES: &[Role] = &[Role::Stagiaire, Role::Admin];
const COMPANY_ROLES: &[Role] = &[Role::Company, Role::Admin];
const ADMIN_ROLES: &[Role] = &[Role::Admin];

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
/// Provides the session and API client contexts, restores the persisted
/// session once hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    provide_context(session);
    provide_context(ApiClient::new(session));

    // Effects only run in the browser, so SSR always renders the pending state.
    Effect::new(move |_| session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/tunisie-intern.css"/>
        <Title text="TunisieIntern"/>

        <Router>
            <LogoutRedirect/>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=OffersPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("offers"), ParamSegment("id")) view=OfferDetailsPage/>

                    <ParentRoute path=StaticSegment("my-applications") view=|| view! { <RouteGuard allowed=STAGIAIRE_ROLES/> }>
                        <Route path=StaticSegment("") view=MyApplicationsPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("profile") view=|| view! { <RouteGuard allowed=STAGIAIRE_ROLES/> }>
                        <Route path=StaticSegment("") view=ProfilePage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("company") view=|| view! { <RouteGuard allowed=COMPANY_ROLES/> }>
                        <Route path=StaticSegment("dashboard") view=CompanyDashboardPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("admin") view=|| view! { <RouteGuard allowed=ADMIN_ROLES/> }>
                        <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Sends the user to `/login` when their session ends, from any page.
#[component]
fn LogoutRedirect() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    install_logout_redirect(session, use_navigate());
}
