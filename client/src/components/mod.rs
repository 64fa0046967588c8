//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `SessionContext` from Leptos context; the
//! guard decides access, the navbar reflects the current role.

pub mod navbar;
pub mod route_guard;
