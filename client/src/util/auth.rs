//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transport only clears the session on a 401; this module turns that
//! (and a manual logout) into navigation to the login page, wherever the
//! user happens to be.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::route_guard::LOGIN_PATH;
use crate::state::session::SessionContext;

/// True when the session just went from authenticated to logged out.
pub fn lost_session(previous: Option<bool>, now: bool) -> bool {
    previous == Some(true) && !now
}

/// Navigate to `/login` whenever an established session disappears.
pub fn install_logout_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state();
    Effect::new(move |previous: Option<bool>| {
        let now = state.with(|s| s.is_authenticated());
        if lost_session(previous, now) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        now
    });
}
