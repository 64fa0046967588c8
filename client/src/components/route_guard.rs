//! Role-based gate in front of protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used as the view of a parent route; nested routes render through its
//! `<Outlet/>` only once the session is known and the role is allowed.
//! Forbidden users are sent home without a message so gated pages are not
//! advertised.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::{SessionContext, SessionState};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating a guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still initializing; render nothing and wait.
    Pending,
    /// No session; go to the login page.
    Unauthenticated,
    /// Logged in with a role outside the allowed set; go home.
    Forbidden,
    /// Render the protected content.
    Authorized,
}

impl GuardDecision {
    /// Where this decision navigates to, if anywhere.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GuardDecision::Unauthenticated => Some(LOGIN_PATH),
            GuardDecision::Forbidden => Some(HOME_PATH),
            GuardDecision::Pending | GuardDecision::Authorized => None,
        }
    }
}

/// Decide access for `allowed` roles. An empty slice admits any logged-in user.
pub fn evaluate(state: &SessionState, allowed: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    let Some(role) = state.role() else {
        return GuardDecision::Unauthenticated;
    };
    if !allowed.is_empty() && !allowed.contains(&role) {
        return GuardDecision::Forbidden;
    }
    GuardDecision::Authorized
}

/// Guarded parent-route view. Re-evaluates on every session change.
#[component]
pub fn RouteGuard(
    /// Roles admitted to the nested routes; empty means any logged-in user.
    #[prop(optional)]
    allowed: &'static [Role],
) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();
    let decision = Memo::new(move |_| state.with(|s| evaluate(s, allowed)));

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = decision.get().redirect_target() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="route-guard route-guard--pending">
                <div class="spinner" aria-busy="true"></div>
            </div>
        }
        .into_any(),
        GuardDecision::Authorized => view! { <Outlet/> }.into_any(),
        GuardDecision::Unauthenticated | GuardDecision::Forbidden => ().into_any(),
    }
}
