//! Top navigation bar with role-aware links.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{SessionContext, SessionState};

/// A navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Links visible for the given session; "Discover" is always first.
pub fn nav_links(state: &SessionState) -> Vec<NavLink> {
    let candidates = [
        (NavLink { label: "Discover", path: "/" }, true),
        (NavLink { label: "My Hub", path: "/my-applications" }, state.is_stagiaire()),
        (NavLink { label: "Enterprise", path: "/company/dashboard" }, state.is_company()),
        (NavLink { label: "Console", path: "/admin/dashboard" }, state.is_admin()),
    ];
    candidates
        .into_iter()
        .filter_map(|(link, show)| show.then_some(link))
        .collect()
}

/// Account-menu link to `/profile`, for the roles its guard admits.
pub fn profile_link(state: &SessionState) -> Option<NavLink> {
    (state.is_stagiaire() || state.is_admin()).then_some(NavLink { label: "Profile", path: "/profile" })
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();

    let links = move || {
        state.with(nav_links)
            .into_iter()
            .map(|link| view! { <A href=link.path attr:class="navbar__link">{link.label}</A> })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "Tunisie"<span class="navbar__brand-accent">"Intern"</span>
            </A>
            <div class="navbar__links">{links}</div>
            <div class="navbar__account">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! {
                        <A href="/login" attr:class="navbar__link">"Sign in"</A>
                        <A href="/register" attr:class="btn btn--primary">"Join"</A>
                    }
                >
                    {move || {
                        state.with(profile_link).map(|link| view! {
                            <A href=link.path attr:class="navbar__link">{link.label}</A>
                        })
                    }}
                    <span class="navbar__user">
                        {move || session.user().map(|u| u.name).unwrap_or_default()}
                    </span>
                    // The app-level logout redirect handles navigation.
                    <button class="btn btn--ghost" on:click=move |_| session.logout()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
